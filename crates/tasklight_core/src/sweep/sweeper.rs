//! Polling sweep over task deadlines.
//!
//! # Responsibility
//! - Find tasks whose deadline has elapsed and fire their reminder once.
//! - Persist the `notified` marker through the store after each firing.
//!
//! # Invariants
//! - Per task the transition is pending -> notified, terminal until the
//!   next edit re-arms it.
//! - One tick visits every due task even when notifications fail.

use super::notify::Notifier;
use crate::model::task::TaskId;
use crate::store::{StoreResult, TaskStore};
use chrono::Utc;
use log::{info, warn};
use std::time::Duration;

/// Polling cadence of the deadline sweep.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(30);

const REMINDER_TITLE: &str = "Task Reminder";

/// Current wall-clock time in epoch milliseconds, the sweep's clock.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Outcome of one sweep tick.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Tasks whose reminder fired this tick, in list order.
    pub fired: Vec<TaskId>,
    /// How many firings went through the fallback channel.
    pub fallbacks: usize,
    /// Firings where both channels failed; the task is still marked
    /// notified so the next tick does not re-fire it.
    pub undelivered: usize,
}

/// Deadline sweeper with an injected notification capability.
///
/// The fallback notifier covers mid-session channel failure, for example
/// a permission revoked after startup.
pub struct Sweeper<P: Notifier, F: Notifier> {
    primary: P,
    fallback: F,
}

impl<P: Notifier, F: Notifier> Sweeper<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Runs one sweep tick against the store at the given clock reading.
    ///
    /// # Contract
    /// - Visits only tasks with a deadline, not completed, not notified.
    /// - Fires when `now_ms >= deadline`, body `Time to: {title}`.
    /// - Marks each fired task notified and persists before moving on.
    /// - Notification failure degrades to the fallback channel and never
    ///   aborts the tick.
    ///
    /// # Errors
    /// - Only store persistence failures propagate; delivery failures are
    ///   reported in the [`SweepReport`].
    pub fn tick(&self, store: &mut TaskStore, now_ms: i64) -> StoreResult<SweepReport> {
        let due: Vec<(TaskId, String)> = store
            .tasks()
            .iter()
            .filter(|task| task.reminder_due(now_ms))
            .map(|task| (task.id, task.title.clone()))
            .collect();

        let mut report = SweepReport::default();
        for (id, title) in due {
            let body = format!("Time to: {title}");

            if let Err(primary_err) = self.primary.notify(REMINDER_TITLE, &body) {
                warn!(
                    "event=notify_fallback module=sweep status=degraded task_id={id} error={primary_err}"
                );
                match self.fallback.notify(REMINDER_TITLE, &body) {
                    Ok(()) => report.fallbacks += 1,
                    Err(fallback_err) => {
                        warn!(
                            "event=notify_failed module=sweep status=error task_id={id} error={fallback_err}"
                        );
                        report.undelivered += 1;
                    }
                }
            }

            store.set_notified(id, true)?;
            report.fired.push(id);
        }

        if !report.fired.is_empty() {
            info!(
                "event=sweep_tick module=sweep status=ok fired={} fallbacks={} undelivered={}",
                report.fired.len(),
                report.fallbacks,
                report.undelivered
            );
        }

        Ok(report)
    }
}
