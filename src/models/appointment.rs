//! Appointment model representing a scheduled, described event.

use crate::domain::rules::{APPOINTMENT_DESCRIPTION, APPOINTMENT_ID};
use crate::domain::{require, Clock, SystemClock};
use crate::error::{RecordError, RecordResult};
use crate::repositories::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field name of the appointment date in error messages.
pub const APPOINTMENT_DATE: &str = "appointment_date";

/// An appointment record.
///
/// All fields are fixed at construction; there are no setters. The date is a
/// plain `Copy` value: the constructor stores its own copy and the accessor
/// hands out a fresh one, so neither side can reach the other's instant.
///
/// Deserializing goes through [`Appointment::new`] and re-checks the date
/// against the wall clock. A serialized appointment whose date has since
/// passed no longer deserializes; use [`Appointment::with_clock`] on the
/// parsed fields to check against another clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppointmentFields")]
pub struct Appointment {
    appointment_id: String,
    appointment_date: DateTime<Utc>,
    description: String,
}

/// Unvalidated wire shape of an appointment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentFields {
    pub appointment_id: Option<String>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl Appointment {
    /// Create a new appointment, checking the date against the wall clock.
    ///
    /// # Errors
    ///
    /// Fails if a string field is too long or if `appointment_date` is
    /// strictly earlier than now.
    pub fn new(
        appointment_id: impl Into<String>,
        appointment_date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> RecordResult<Self> {
        Self::with_clock(appointment_id, appointment_date, description, &SystemClock)
    }

    /// Create a new appointment, taking "now" from `clock`.
    ///
    /// A date equal to `clock.now()` is accepted.
    pub fn with_clock(
        appointment_id: impl Into<String>,
        appointment_date: DateTime<Utc>,
        description: impl Into<String>,
        clock: &dyn Clock,
    ) -> RecordResult<Self> {
        let appointment_id = APPOINTMENT_ID.accept(appointment_id)?;

        if appointment_date < clock.now() {
            return Err(RecordError::InPast {
                field: APPOINTMENT_DATE,
            });
        }

        Ok(Self {
            appointment_id,
            appointment_date,
            description: APPOINTMENT_DESCRIPTION.accept(description)?,
        })
    }

    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    pub fn appointment_date(&self) -> DateTime<Utc> {
        self.appointment_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<AppointmentFields> for Appointment {
    type Error = RecordError;

    fn try_from(fields: AppointmentFields) -> RecordResult<Self> {
        Appointment::new(
            require(APPOINTMENT_ID.field, fields.appointment_id)?,
            require(APPOINTMENT_DATE, fields.appointment_date)?,
            require(APPOINTMENT_DESCRIPTION.field, fields.description)?,
        )
    }
}

impl Record for Appointment {
    const KIND: &'static str = "appointment";
    const ID_FIELD: &'static str = "appointment_id";

    fn id(&self) -> &str {
        &self.appointment_id
    }
}
