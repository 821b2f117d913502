//! Pure rendering helpers for the task list.
//!
//! # Responsibility
//! - Filter tasks by a case-insensitive substring over title or category.
//! - Compute completion progress with the literal counts.
//! - Format one display line per task.
//!
//! # Invariants
//! - Rendering is idempotent and side-effect-free.
//! - The deadline line is omitted entirely for tasks without a deadline.

use crate::model::task::Task;
use chrono::{Local, TimeZone};

/// Completion summary over the full (unfiltered) task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage of completed tasks, rounded to the nearest integer.
    ///
    /// An empty list reports 0, not a division error.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.completed as f64 / self.total as f64;
        (ratio * 100.0).round() as u8
    }

    /// Progress line shown under the list.
    pub fn summary(&self) -> String {
        format!(
            "{}% Complete ({}/{} tasks)",
            self.percent(),
            self.completed,
            self.total
        )
    }
}

/// Computes completion progress over all tasks.
///
/// Progress deliberately ignores the search filter: it describes the
/// whole list, not the displayed subset.
pub fn progress(tasks: &[Task]) -> Progress {
    Progress {
        completed: tasks.iter().filter(|task| task.completed).count(),
        total: tasks.len(),
    }
}

/// Selects the displayed subset for a search string.
///
/// The predicate is a case-insensitive substring match against title OR
/// category; an empty filter matches everything.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &str) -> Vec<&'a Task> {
    let needle = filter.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Formats an epoch-millisecond deadline in local date+time.
pub fn format_deadline(deadline_ms: i64) -> String {
    match Local.timestamp_millis_opt(deadline_ms).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("@{deadline_ms}ms"),
    }
}

/// Formats one display line for a task.
///
/// Completed tasks get a distinct `[x]` marker; the `Due:` segment only
/// appears when a deadline is set.
pub fn format_task_line(task: &Task) -> String {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    let id_text = task.id.to_string();
    let short_id = &id_text[..8];
    let mut line = format!("{marker} {short_id}  {}  #{}", task.title, task.category);
    if let Some(deadline_ms) = task.deadline {
        line.push_str("  Due: ");
        line.push_str(&format_deadline(deadline_ms));
    }
    line
}
