//! Create/edit form controller.
//!
//! # Responsibility
//! - Map a create or edit intent onto validated store fields.
//! - Own the transient edit-target reference and input state.
//!
//! # Invariants
//! - Canceling a form never touches the store.
//! - A submitted edit always clears the target's `notified` flag (via
//!   `TaskStore::replace`).

pub mod task_form;
