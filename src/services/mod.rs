//! Application service layer.
//!
//! One service per record kind. Each owns an identity-keyed repository and
//! enforces uniqueness on add and existence on delete and update. Lookup
//! treats an unknown id as a normal `None` result.

mod appointment_service;
mod contact_service;
mod task_service;

pub use appointment_service::AppointmentService;
pub use contact_service::{ContactService, ContactUpdate};
pub use task_service::{TaskService, TaskUpdate};
