//! In-memory state stores owned by screen sessions.
//!
//! # Responsibility
//! - Own every piece of mutable screen state and its lifecycle rules.
//! - Report each mutation through a `ChangeNotifier` so the shell re-renders.
//!
//! # Invariants
//! - Stores are single-owner and never shared across screens.
//! - Timer-driven removals are owned tasks, cancelled on teardown.

pub mod ephemeral;
pub mod gallery;
pub mod rotation;
pub mod thread;
