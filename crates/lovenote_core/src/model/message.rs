//! Message model for the local love-message thread.
//!
//! # Responsibility
//! - Define the append-only message record and its direction.
//! - Normalize and validate user-entered text before it becomes a message.
//!
//! # Invariants
//! - Stored text is trimmed and never empty.
//! - Stored text never exceeds the configured char limit.
//! - `seq` is strictly increasing within one thread.

use crate::clock::EpochMillis;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one message.
pub type MessageId = Uuid;

/// Default max message length, in chars.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
        }
    }
}

/// One entry in the message thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Trimmed message body.
    pub text: String,
    /// Epoch milliseconds when the message was appended or seeded.
    pub created_at: EpochMillis,
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Local append order.
    pub seq: u64,
}

/// Reason a text submission was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Input is empty or whitespace-only.
    Empty,
    /// Trimmed input is longer than the allowed char count.
    TooLong { chars: usize, max: usize },
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "message text is empty"),
            Self::TooLong { chars, max } => {
                write!(f, "message text has {chars} chars; limit is {max}")
            }
        }
    }
}

impl Error for SubmitError {}

/// Trims raw input and checks it against the char limit.
///
/// # Errors
/// - `SubmitError::Empty` when nothing remains after trimming.
/// - `SubmitError::TooLong` when the trimmed text exceeds `max_chars`.
pub fn normalize_message_text(raw: &str, max_chars: usize) -> Result<&str, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::Empty);
    }
    let chars = trimmed.chars().count();
    if chars > max_chars {
        return Err(SubmitError::TooLong {
            chars,
            max: max_chars,
        });
    }
    Ok(trimmed)
}
