//! Command handlers for the record server.
//!
//! Each line on the wire is one [`Command`], tagged by `op`. Handlers call the
//! matching service operation and turn the outcome into a [`Response`].

use crate::domain::rules::{APPOINTMENT_DESCRIPTION, APPOINTMENT_ID};
use crate::domain::{require, Clock, SystemClock};
use crate::error::{CommandError, CommandResult};
use crate::models::appointment::APPOINTMENT_DATE;
use crate::models::{Appointment, AppointmentFields, Contact, ContactFields, Task, TaskFields};
use crate::repositories::Record;
use crate::services::{AppointmentService, ContactService, ContactUpdate, TaskService, TaskUpdate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// A request on the command surface.
///
/// Identity and record arguments are optional on the wire so that a missing
/// value is reported as "must not be null" rather than a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddContact {
        contact: Option<ContactFields>,
    },
    UpdateContact {
        contact_id: Option<String>,
        #[serde(default)]
        changes: ContactUpdate,
    },
    DeleteContact {
        contact_id: Option<String>,
    },
    GetContact {
        contact_id: Option<String>,
    },
    ListContacts,
    CountContacts,

    AddTask {
        task: Option<TaskFields>,
    },
    UpdateTask {
        task_id: Option<String>,
        #[serde(default)]
        changes: TaskUpdate,
    },
    DeleteTask {
        task_id: Option<String>,
    },
    GetTask {
        task_id: Option<String>,
    },
    ListTasks,
    CountTasks,

    AddAppointment {
        appointment: Option<AppointmentFields>,
    },
    DeleteAppointment {
        appointment_id: Option<String>,
    },
    GetAppointment {
        appointment_id: Option<String>,
    },
    ListAppointments,
    CountAppointments,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success { ok: bool, data: Value },
    Failure { ok: bool, error: String },
}

impl Response {
    pub fn success(data: Value) -> Self {
        Response::Success { ok: true, data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Response::Failure {
            ok: false,
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Success { .. })
    }
}

/// Owns one service per record kind and dispatches commands to them.
pub struct RecordServer {
    contacts: ContactService,
    tasks: TaskService,
    appointments: AppointmentService,
    clock: Box<dyn Clock>,
}

impl RecordServer {
    /// Create a server with empty services and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a server whose appointment checks read "now" from `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            contacts: ContactService::new(),
            tasks: TaskService::new(),
            appointments: AppointmentService::new(),
            clock,
        }
    }

    pub fn contacts(&self) -> &ContactService {
        &self.contacts
    }

    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    pub fn appointments(&self) -> &AppointmentService {
        &self.appointments
    }

    /// Parse and run one line, never failing: errors become failure responses.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let outcome = serde_json::from_str::<Command>(line)
            .map_err(CommandError::from)
            .and_then(|command| self.handle(command));

        match outcome {
            Ok(data) => Response::success(data),
            Err(e) => Response::failure(e.to_string()),
        }
    }

    /// Run a parsed command against the services.
    pub fn handle(&mut self, command: Command) -> CommandResult<Value> {
        debug!(?command, "Handling command");

        match command {
            Command::AddContact { contact } => {
                let contact = Contact::try_from(require(Contact::KIND, contact)?)?;
                let data = to_value(&contact)?;
                self.contacts.add(contact)?;
                Ok(data)
            }
            Command::UpdateContact {
                contact_id,
                changes,
            } => {
                let id = require(Contact::ID_FIELD, contact_id)?;
                self.contacts.update(&id, changes)?;
                to_value(&self.contacts.get(&id))
            }
            Command::DeleteContact { contact_id } => {
                let id = require(Contact::ID_FIELD, contact_id)?;
                self.contacts.delete(&id)?;
                Ok(json!({ "deleted": id }))
            }
            Command::GetContact { contact_id } => {
                let id = require(Contact::ID_FIELD, contact_id)?;
                to_value(&self.contacts.get(&id))
            }
            Command::ListContacts => to_value(&self.contacts.list()),
            Command::CountContacts => Ok(json!(self.contacts.count())),

            Command::AddTask { task } => {
                let task = Task::try_from(require(Task::KIND, task)?)?;
                let data = to_value(&task)?;
                self.tasks.add(task)?;
                Ok(data)
            }
            Command::UpdateTask { task_id, changes } => {
                let id = require(Task::ID_FIELD, task_id)?;
                self.tasks.update(&id, changes)?;
                to_value(&self.tasks.get(&id))
            }
            Command::DeleteTask { task_id } => {
                let id = require(Task::ID_FIELD, task_id)?;
                self.tasks.delete(&id)?;
                Ok(json!({ "deleted": id }))
            }
            Command::GetTask { task_id } => {
                let id = require(Task::ID_FIELD, task_id)?;
                to_value(&self.tasks.get(&id))
            }
            Command::ListTasks => to_value(&self.tasks.list()),
            Command::CountTasks => Ok(json!(self.tasks.count())),

            Command::AddAppointment { appointment } => {
                let fields = require(Appointment::KIND, appointment)?;
                let appointment = self.build_appointment(fields)?;
                let data = to_value(&appointment)?;
                self.appointments.add(appointment)?;
                Ok(data)
            }
            Command::DeleteAppointment { appointment_id } => {
                let id = require(Appointment::ID_FIELD, appointment_id)?;
                self.appointments.delete(&id)?;
                Ok(json!({ "deleted": id }))
            }
            Command::GetAppointment { appointment_id } => {
                let id = require(Appointment::ID_FIELD, appointment_id)?;
                to_value(&self.appointments.get(&id))
            }
            Command::ListAppointments => to_value(&self.appointments.list()),
            Command::CountAppointments => Ok(json!(self.appointments.count())),
        }
    }

    fn build_appointment(&self, fields: AppointmentFields) -> CommandResult<Appointment> {
        Ok(Appointment::with_clock(
            require(APPOINTMENT_ID.field, fields.appointment_id)?,
            require(APPOINTMENT_DATE, fields.appointment_date)?,
            require(APPOINTMENT_DESCRIPTION.field, fields.description)?,
            self.clock.as_ref(),
        )?)
    }
}

impl Default for RecordServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_value<T: Serialize>(value: &T) -> CommandResult<Value> {
    Ok(serde_json::to_value(value)?)
}
