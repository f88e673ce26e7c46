//! Cancellable one-shot scheduling.
//!
//! # Responsibility
//! - Replace fire-and-forget delayed callbacks with owned, cancellable tasks.
//! - Keep firing order deterministic for host-driven ticks.
//!
//! # Invariants
//! - A task fires at most once and never before its deadline.
//! - Dropping the owner of a queue drops every pending task with it.

pub mod timer;
