//! Task form state and submission rules.
//!
//! # Responsibility
//! - Hold the raw input fields for a create or edit interaction.
//! - Resolve the preset-vs-free-form category split on prefill and submit.
//! - Validate and convert inputs into [`TaskFields`].
//!
//! # Invariants
//! - Edit prefill falls back to the `Others` slot whenever the stored
//!   category is not a preset (case-insensitive).
//! - Submission with a blank title, or a blank active free-form slot, is
//!   rejected without any store mutation.

use crate::model::task::{CategoryPreset, Task, TaskId};
use crate::store::TaskFields;
use chrono::{Local, LocalResult, NaiveDateTime, TimeZone};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accepted deadline input shapes: the datetime-local wire format and a
/// space-separated equivalent.
const DEADLINE_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Entry mode for the form: a fresh task or an edit of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

/// Validation error raised by [`TaskForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// `Others` is selected but the free-form slot is empty.
    EmptyCustomCategory,
    /// Non-empty deadline text that is not a recognized date+time.
    InvalidDeadline(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::EmptyCustomCategory => write!(f, "custom category is required"),
            Self::InvalidDeadline(value) => {
                write!(f, "unrecognized deadline `{value}`; expected YYYY-MM-DD HH:MM")
            }
        }
    }
}

impl Error for FormError {}

/// In-flight form state for one create or edit interaction.
///
/// Dropping the form is the cancel path; only [`TaskForm::submit`]
/// produces anything a caller can apply to the store.
#[derive(Debug, Clone)]
pub struct TaskForm {
    mode: FormMode,
    title: String,
    category: CategoryPreset,
    custom_category: String,
    deadline: String,
}

impl TaskForm {
    /// Opens a blank create form.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            category: CategoryPreset::Work,
            custom_category: String::new(),
            deadline: String::new(),
        }
    }

    /// Opens an edit form pre-populated from an existing task.
    ///
    /// # Contract
    /// - A stored category matching a preset selects that preset.
    /// - Anything else selects `Others` with the free-form slot holding
    ///   the stored string verbatim.
    pub fn edit_from(task: &Task) -> Self {
        let (category, custom_category) = match CategoryPreset::parse(&task.category) {
            Some(CategoryPreset::Others) | None => {
                (CategoryPreset::Others, task.category.clone())
            }
            Some(preset) => (preset, String::new()),
        };

        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            category,
            custom_category,
            deadline: task.deadline.map(format_deadline_input).unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Selects a category preset.
    ///
    /// Leaving `Others` clears the free-form slot, mirroring the select
    /// widget hiding and emptying the custom input.
    pub fn set_category(&mut self, preset: CategoryPreset) {
        self.category = preset;
        if preset != CategoryPreset::Others {
            self.custom_category.clear();
        }
    }

    pub fn set_custom_category(&mut self, value: impl Into<String>) {
        self.custom_category = value.into();
    }

    /// Raw deadline text; empty means "no deadline".
    pub fn set_deadline(&mut self, value: impl Into<String>) {
        self.deadline = value.into();
    }

    /// Whether the free-form category slot is active (and required).
    pub fn custom_category_active(&self) -> bool {
        self.category == CategoryPreset::Others
    }

    /// Validates the inputs and produces store-ready fields.
    ///
    /// # Contract
    /// - Title is trimmed; blank titles are rejected.
    /// - With `Others` selected, the trimmed free-form value becomes the
    ///   category; a whitespace-only value degrades to the `others`
    ///   label, a truly empty slot is rejected.
    /// - Empty deadline text maps to `None`; unparseable text is an
    ///   error, matching a date widget refusing bad input.
    pub fn submit(&self) -> Result<TaskFields, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let category = if self.custom_category_active() {
            if self.custom_category.is_empty() {
                return Err(FormError::EmptyCustomCategory);
            }
            let custom = self.custom_category.trim();
            if custom.is_empty() {
                CategoryPreset::Others.as_str().to_string()
            } else {
                custom.to_string()
            }
        } else {
            self.category.as_str().to_string()
        };

        let deadline = parse_deadline_input(&self.deadline)?;

        debug!(
            "event=form_submit module=form status=ok mode={:?} has_deadline={}",
            self.mode,
            deadline.is_some()
        );

        Ok(TaskFields {
            title: title.to_string(),
            category,
            deadline,
        })
    }
}

/// Parses user deadline text into epoch milliseconds.
///
/// Empty (or whitespace-only) text means "no deadline".
pub fn parse_deadline_input(value: &str) -> Result<Option<i64>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    for format in DEADLINE_INPUT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            let resolved = match Local.from_local_datetime(&naive) {
                LocalResult::Single(datetime) => datetime,
                LocalResult::Ambiguous(earliest, _) => earliest,
                LocalResult::None => continue,
            };
            return Ok(Some(resolved.timestamp_millis()));
        }
    }

    Err(FormError::InvalidDeadline(trimmed.to_string()))
}

/// Formats an epoch-millisecond deadline back into form input text.
pub fn format_deadline_input(deadline_ms: i64) -> String {
    match Local.timestamp_millis_opt(deadline_ms).single() {
        Some(datetime) => datetime.format("%Y-%m-%dT%H:%M").to_string(),
        None => String::new(),
    }
}
