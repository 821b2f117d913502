//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical task record persisted across sessions.
//! - Define the closed category preset set used by the form layer.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, never by list position.
//! - Task titles are non-empty after trimming.

pub mod task;
