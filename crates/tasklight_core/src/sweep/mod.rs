//! Deadline reminder sweep.
//!
//! # Responsibility
//! - Compare wall-clock time to task deadlines on a polling cadence.
//! - Emit at most one reminder per task per edit cycle.
//!
//! # Invariants
//! - Completed tasks and tasks without a deadline are never evaluated.
//! - A single notification failure never stops the sweep; it degrades to
//!   the fallback channel and continues with the rest of the list.

pub mod notify;
pub mod sweeper;
