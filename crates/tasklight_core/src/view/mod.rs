//! Read-only list rendering entry points.
//!
//! # Responsibility
//! - Compute the filtered, displayed subset and the progress summary.
//! - Keep all rendering pure; the view never mutates the store.

pub mod render;
