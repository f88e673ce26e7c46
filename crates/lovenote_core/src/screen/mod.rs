//! Per-screen state aggregates.
//!
//! # Responsibility
//! - Bind stores to built-in content for each tab of the app.
//! - Produce serializable views that the shell renders as-is.
//!
//! # Invariants
//! - A view's `revision` changes whenever anything it shows changed.
//! - Screens own their state exclusively; nothing is shared between tabs.

pub mod home;
pub mod memories;
pub mod messages;
pub mod settings;
