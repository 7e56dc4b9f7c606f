//! Task service layer.

use crate::error::RecordResult;
use crate::models::Task;
use crate::repositories::{InMemoryRepository, Record};
use serde::Deserialize;
use tracing::{debug, warn};

/// Fields to change on an existing task. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Identity-keyed store of tasks.
#[derive(Debug, Default)]
pub struct TaskService {
    tasks: InMemoryRepository<Task>,
}

impl TaskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new task. Fails if the id is taken.
    pub fn add(&mut self, task: Task) -> RecordResult<()> {
        let id = task.id().to_string();
        self.tasks
            .insert(task)
            .inspect(|_| debug!(task_id = %id, "Task added"))
            .inspect_err(|e| warn!(task_id = %id, error = %e, "Task rejected"))
    }

    /// Remove the task with this id. Fails if it is not stored.
    pub fn delete(&mut self, task_id: &str) -> RecordResult<()> {
        self.tasks
            .remove(task_id)
            .map(|_| debug!(task_id, "Task deleted"))
            .inspect_err(|e| warn!(task_id, error = %e, "Task delete rejected"))
    }

    /// Apply a partial update: name first, then description.
    ///
    /// An invalid description fails the call after a valid name has already
    /// been applied.
    pub fn update(&mut self, task_id: &str, changes: TaskUpdate) -> RecordResult<()> {
        let task = self
            .tasks
            .get_mut(task_id)
            .inspect_err(|e| warn!(task_id, error = %e, "Task update rejected"))?;

        Self::apply(task, changes)
            .inspect(|_| debug!(task_id, "Task updated"))
            .inspect_err(|e| warn!(task_id, error = %e, "Task update stopped"))
    }

    fn apply(task: &mut Task, changes: TaskUpdate) -> RecordResult<()> {
        if let Some(name) = changes.name {
            task.set_name(name)?;
        }
        if let Some(description) = changes.description {
            task.set_description(description)?;
        }
        Ok(())
    }

    /// Look up a task. An unknown id yields `None`.
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn list(&self) -> Vec<&Task> {
        self.tasks.sorted()
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}
