//! Domain validation building blocks.
//!
//! This module contains the per-field constraint tables shared by the record
//! types and the clock abstraction used for appointment date checks. Records
//! run these rules on construction and on every mutation, so invalid data is
//! never represented in the system.

pub mod clock;
pub mod rules;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{require, FieldRule, Format};
