//! Core domain logic for tasklight.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod store;
pub mod sweep;
pub mod view;

pub use form::task_form::{parse_deadline_input, FormError, FormMode, TaskForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{CategoryPreset, Task, TaskId, TaskValidationError};
pub use store::{StoreError, StoreResult, TaskFields, TaskStore};
pub use sweep::notify::{AlertNotifier, ConsoleNotifier, Notifier, NotifyError};
pub use sweep::sweeper::{now_epoch_ms, SweepReport, Sweeper, SWEEP_INTERVAL};
pub use view::render::{filter_tasks, format_task_line, progress, Progress};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
