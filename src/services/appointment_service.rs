//! Appointment service layer.
//!
//! Appointments are immutable once stored, so the service offers add and
//! delete but no update.

use crate::error::RecordResult;
use crate::models::Appointment;
use crate::repositories::{InMemoryRepository, Record};
use tracing::{debug, warn};

/// Identity-keyed store of appointments.
#[derive(Debug, Default)]
pub struct AppointmentService {
    appointments: InMemoryRepository<Appointment>,
}

impl AppointmentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new appointment. Fails if the id is taken.
    pub fn add(&mut self, appointment: Appointment) -> RecordResult<()> {
        let id = appointment.id().to_string();
        self.appointments
            .insert(appointment)
            .inspect(|_| debug!(appointment_id = %id, "Appointment added"))
            .inspect_err(|e| warn!(appointment_id = %id, error = %e, "Appointment rejected"))
    }

    /// Remove the appointment with this id. Fails if it is not stored.
    pub fn delete(&mut self, appointment_id: &str) -> RecordResult<()> {
        self.appointments
            .remove(appointment_id)
            .map(|_| debug!(appointment_id, "Appointment deleted"))
            .inspect_err(|e| warn!(appointment_id, error = %e, "Appointment delete rejected"))
    }

    /// Look up an appointment. An unknown id yields `None`.
    pub fn get(&self, appointment_id: &str) -> Option<&Appointment> {
        self.appointments.get(appointment_id)
    }

    pub fn list(&self) -> Vec<&Appointment> {
        self.appointments.sorted()
    }

    pub fn count(&self) -> usize {
        self.appointments.len()
    }
}
