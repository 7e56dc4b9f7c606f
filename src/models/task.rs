//! Task model representing a named unit of work.

use crate::domain::require;
use crate::domain::rules::{TASK_DESCRIPTION, TASK_ID, TASK_NAME};
use crate::error::{RecordError, RecordResult};
use crate::repositories::Record;
use serde::{Deserialize, Serialize};

/// A task record.
///
/// Fields are length-bounded but may be empty. `task_id` is fixed at
/// construction; `name` and `description` change only through validated
/// setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    task_id: String,
    name: String,
    description: String,
}

/// Unvalidated wire shape of a task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskFields {
    pub task_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Task {
    /// Create a new task, validating every field.
    pub fn new(
        task_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> RecordResult<Self> {
        Ok(Self {
            task_id: TASK_ID.accept(task_id)?,
            name: TASK_NAME.accept(name)?,
            description: TASK_DESCRIPTION.accept(description)?,
        })
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> RecordResult<()> {
        self.name = TASK_NAME.accept(name)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> RecordResult<()> {
        self.description = TASK_DESCRIPTION.accept(description)?;
        Ok(())
    }
}

impl TryFrom<TaskFields> for Task {
    type Error = RecordError;

    fn try_from(fields: TaskFields) -> RecordResult<Self> {
        Task::new(
            require(TASK_ID.field, fields.task_id)?,
            require(TASK_NAME.field, fields.name)?,
            require(TASK_DESCRIPTION.field, fields.description)?,
        )
    }
}

impl Record for Task {
    const KIND: &'static str = "task";
    const ID_FIELD: &'static str = "task_id";

    fn id(&self) -> &str {
        &self.task_id
    }
}
