//! Domain model for love-note screen state.
//!
//! # Responsibility
//! - Define the records owned by screen sessions and shown by the shell.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Runtime-created records carry a random UUID identity.
//! - Memories are static catalog data and never created at runtime.

pub mod memory;
pub mod message;
pub mod settings;
pub mod token;
