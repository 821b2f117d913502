//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, view, form and sweep.
//! - Define the category preset vocabulary.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after trimming.
//! - `notified` only moves false -> true, except when an edit re-arms it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every task at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// List position is deliberately not an identity: positions shift under
/// delete and filter, stable IDs do not.
pub type TaskId = Uuid;

/// Closed set of category presets offered by the task form.
///
/// `Others` doubles as the free-form sentinel: when selected, the form
/// reads the category text from a free-form input instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPreset {
    Work,
    Personal,
    Others,
}

impl CategoryPreset {
    /// Stable string id used in persisted records and form state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Others => "others",
        }
    }

    /// Parses a stored category string, case-insensitively.
    ///
    /// Returns `None` for free-form categories that are not presets.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

/// Validation error for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Category resolved to an empty string.
    EmptyCategory,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyCategory => write!(f, "task category must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// The persisted shape is the JSON object produced by serde for this
/// struct; the whole list is stored as one JSON array under a single
/// durable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup and mutation targeting.
    pub id: TaskId,
    /// User-supplied title; non-empty after trimming.
    pub title: String,
    /// Preset id (`work`/`personal`/`others`) or free-form text.
    pub category: String,
    /// Deadline in unix epoch milliseconds. `None` means no reminder.
    pub deadline: Option<i64>,
    /// Completion flag toggled from the list view.
    pub completed: bool,
    /// Reminder-fired marker. Set exactly once per edit cycle by the
    /// sweeper; cleared only by an edit, which re-arms the reminder.
    pub notified: bool,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` and `notified` start as `false`.
    pub fn new(title: impl Into<String>, category: impl Into<String>, deadline: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category: category.into(),
            deadline,
            completed: false,
            notified: false,
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank after trimming.
    /// - `EmptyCategory` when the category is blank after trimming.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(TaskValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Returns whether the sweeper should evaluate this task at all.
    ///
    /// Completed tasks, already-notified tasks and tasks without a
    /// deadline are skipped, not transitioned.
    pub fn reminder_pending(&self) -> bool {
        self.deadline.is_some() && !self.notified && !self.completed
    }

    /// Returns whether the reminder should fire at `now_ms`.
    pub fn reminder_due(&self, now_ms: i64) -> bool {
        match self.deadline {
            Some(deadline_ms) => self.reminder_pending() && deadline_ms <= now_ms,
            None => false,
        }
    }
}
