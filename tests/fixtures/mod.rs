//! Test fixtures and sample data for integration tests.
//!
//! Provides reusable valid records so each test only spells out the field it
//! is exercising.

use chrono::{DateTime, Duration, TimeZone, Utc};
use record_services::{Appointment, Contact, Task};

/// A valid contact with the given id.
#[allow(dead_code)]
pub fn sample_contact(id: &str) -> Contact {
    Contact::new(id, "John", "Smith", "1234567890", "123 Main St").expect("valid sample contact")
}

/// A valid task with the given id.
#[allow(dead_code)]
pub fn sample_task(id: &str) -> Task {
    Task::new(id, "Write report", "Summarize quarterly results").expect("valid sample task")
}

/// One day from now, comfortably in the future for wall-clock checks.
#[allow(dead_code)]
pub fn future_date() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

/// One day ago.
#[allow(dead_code)]
pub fn past_date() -> DateTime<Utc> {
    Utc::now() - Duration::days(1)
}

/// The instant used with `FixedClock` in deterministic tests.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap()
}

/// A valid appointment with the given id, dated tomorrow.
#[allow(dead_code)]
pub fn sample_appointment(id: &str) -> Appointment {
    Appointment::new(id, future_date(), "Routine appointment").expect("valid sample appointment")
}
