//! Record Services - in-memory contacts, tasks, and appointments.
//!
//! This library keeps three independent kinds of record in memory, each behind
//! a service that enforces unique identities and validates every field on the
//! way in.
//!
//! # Architecture
//!
//! - **domain**: Field constraint tables and the clock used for date checks
//! - **models**: Validated `Contact`, `Task`, and `Appointment` records
//! - **repositories**: Identity-keyed in-memory storage
//! - **services**: Add/delete/update/lookup operations per record kind
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **server**: JSON-lines command surface over the services

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Clock, FixedClock, SystemClock};
pub use error::{CommandError, ConfigError, RecordError, RecordResult};
pub use models::{Appointment, Contact, Task};
pub use server::{Command, RecordServer, Response};
pub use services::{AppointmentService, ContactService, ContactUpdate, TaskService, TaskUpdate};
