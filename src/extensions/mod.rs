//! Observer hooks for hosts that react to view changes.
//!
//! Listeners read engine context; they never mutate engine internals.

pub mod listeners;

pub use listeners::{ViewContext, ViewEvent, ViewListener};
