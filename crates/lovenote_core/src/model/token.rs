//! Ephemeral token model.
//!
//! # Responsibility
//! - Describe one transient visual element (a floating heart).
//!
//! # Invariants
//! - `id` is unique for the session, even for tokens added in the same
//!   millisecond.
//! - `revealed` only ever moves from `false` to `true`.

use crate::clock::EpochMillis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one ephemeral token.
pub type TokenId = Uuid;

/// One transient visual element with a fixed lifespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    /// Epoch milliseconds when the token was added.
    pub created_at: EpochMillis,
    /// Number of tokens already visible when this one was added.
    pub ordinal: usize,
    /// Whether the staggered display delay has elapsed.
    pub revealed: bool,
}

impl Token {
    /// Creates an unrevealed token with a fresh id.
    pub fn new(created_at: EpochMillis, ordinal: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            ordinal,
            revealed: false,
        }
    }

    /// Epoch milliseconds at which this token must be gone.
    pub fn expires_at(&self, ttl_ms: u64) -> EpochMillis {
        self.created_at
            .saturating_add(i64::try_from(ttl_ms).unwrap_or(i64::MAX))
    }
}
