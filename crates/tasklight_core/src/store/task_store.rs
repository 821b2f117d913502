//! List-backed task store with write-through persistence.
//!
//! # Responsibility
//! - Provide the mutation API for task records, addressed by stable ID.
//! - Mirror the full list to the `tasks` durable key on every mutation.
//!
//! # Invariants
//! - List order is insertion order; edits replace in place.
//! - `replace` always resets `notified` to false, re-arming the reminder.
//! - Malformed persisted data resets to an empty list instead of failing.

use super::kv;
use super::StoreResult;
use crate::model::task::{Task, TaskId};
use log::{debug, info, warn};
use rusqlite::Connection;

const TASKS_KEY: &str = "tasks";
const DARK_MODE_KEY: &str = "dark_mode";

/// Editable field set for create/edit submissions.
///
/// Produced by the task form; `completed` is deliberately absent since
/// the form never changes it and `notified` is always forced to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub category: String,
    pub deadline: Option<i64>,
}

/// Owner of the in-memory task list and its durable mirror.
pub struct TaskStore {
    conn: Connection,
    tasks: Vec<Task>,
    dark_mode: bool,
    revision: u64,
}

impl TaskStore {
    /// Loads persisted state from an opened connection.
    ///
    /// Absent or malformed task data falls back to an empty list; a
    /// corrupt blob must never prevent startup.
    pub fn load(conn: Connection) -> StoreResult<Self> {
        let tasks = match kv::get(&conn, TASKS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered error_code=malformed_tasks error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let dark_mode = matches!(kv::get(&conn, DARK_MODE_KEY)?.as_deref(), Some("true"));

        info!(
            "event=store_load module=store status=ok count={} dark_mode={dark_mode}",
            tasks.len()
        );

        Ok(Self {
            conn,
            tasks,
            dark_mode,
            revision: 0,
        })
    }

    /// Returns the current ordered task list.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by stable ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Change counter bumped after every persisted mutation.
    ///
    /// The renderer compares revisions to decide when to redraw; it must
    /// not cache task references across a revision change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a new task built from form fields.
    ///
    /// # Contract
    /// - New tasks start with `completed = false, notified = false`.
    /// - Persists before returning the generated ID.
    pub fn add(&mut self, fields: TaskFields) -> StoreResult<TaskId> {
        let task = Task::new(fields.title, fields.category, fields.deadline);
        task.validate()?;

        let id = task.id;
        self.tasks.push(task);
        self.persist_tasks()?;
        info!("event=task_add module=store status=ok task_id={id}");
        Ok(id)
    }

    /// Replaces the editable fields of the task with the given ID.
    ///
    /// # Contract
    /// - The task keeps its position and `completed` flag.
    /// - `notified` is reset to false, re-arming the reminder even when
    ///   the new deadline already passed.
    pub fn replace(&mut self, id: TaskId, fields: TaskFields) -> StoreResult<()> {
        let index = self.index_of(id)?;

        let mut updated = self.tasks[index].clone();
        updated.title = fields.title;
        updated.category = fields.category;
        updated.deadline = fields.deadline;
        updated.notified = false;
        updated.validate()?;

        self.tasks[index] = updated;
        self.persist_tasks()?;
        info!("event=task_replace module=store status=ok task_id={id}");
        Ok(())
    }

    /// Removes exactly one task, preserving the order of the remainder.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.tasks.remove(index);
        self.persist_tasks()?;
        info!("event=task_remove module=store status=ok task_id={id}");
        Ok(())
    }

    /// Sets the completion flag on one task.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.tasks[index].completed = completed;
        self.persist_tasks()?;
        debug!("event=task_set_completed module=store status=ok task_id={id} completed={completed}");
        Ok(())
    }

    /// Sets the reminder-fired marker on one task.
    ///
    /// Only the sweeper sets this to true; edits clear it through
    /// [`TaskStore::replace`].
    pub fn set_notified(&mut self, id: TaskId, notified: bool) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.tasks[index].notified = notified;
        self.persist_tasks()?;
        debug!("event=task_set_notified module=store status=ok task_id={id} notified={notified}");
        Ok(())
    }

    /// Current dark-mode preference.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Persists the dark-mode preference as the literal string
    /// `"true"`/`"false"`.
    pub fn set_dark_mode(&mut self, enabled: bool) -> StoreResult<()> {
        kv::put(
            &self.conn,
            DARK_MODE_KEY,
            if enabled { "true" } else { "false" },
        )?;
        self.dark_mode = enabled;
        self.revision += 1;
        debug!("event=dark_mode_set module=store status=ok enabled={enabled}");
        Ok(())
    }

    fn index_of(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(super::StoreError::TaskNotFound(id))
    }

    fn persist_tasks(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.tasks)?;
        kv::put(&self.conn, TASKS_KEY, &encoded)?;
        self.revision += 1;
        debug!(
            "event=store_persist module=store status=ok count={} revision={}",
            self.tasks.len(),
            self.revision
        );
        Ok(())
    }
}
