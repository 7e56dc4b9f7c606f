//! Data models for the three record kinds.
//!
//! Each record validates its fields on construction and on every mutation,
//! so an instance is never observable in an invalid state.

pub mod appointment;
pub mod contact;
pub mod task;

pub use appointment::{Appointment, AppointmentFields};
pub use contact::{Contact, ContactFields};
pub use task::{Task, TaskFields};
