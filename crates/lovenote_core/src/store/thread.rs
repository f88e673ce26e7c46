//! Append-only message thread.
//!
//! # Responsibility
//! - Hold the ordered local conversation for the messages screen.
//! - Validate user input before appending a sent message.
//!
//! # Invariants
//! - Messages are only ever appended; no edit, delete or reorder.
//! - Rejected input leaves the thread untouched.
//! - `seq` increases by one per appended message.

use crate::clock::{Clock, EpochMillis};
use crate::model::message::{
    normalize_message_text, Direction, Message, MessageId, SubmitError,
};
use crate::notify::ChangeNotifier;
use log::debug;
use uuid::Uuid;

/// Ordered, in-memory message log.
#[derive(Debug)]
pub struct MessageThread<C: Clock> {
    clock: C,
    max_chars: usize,
    messages: Vec<Message>,
    next_seq: u64,
    changes: ChangeNotifier<MessageId>,
}

impl<C: Clock> MessageThread<C> {
    pub fn new(clock: C, max_chars: usize) -> Self {
        Self {
            clock,
            max_chars,
            messages: Vec::new(),
            next_seq: 0,
            changes: ChangeNotifier::new(),
        }
    }

    /// Whether the shell should enable its send control for `draft`.
    pub fn can_submit(&self, draft: &str) -> bool {
        normalize_message_text(draft, self.max_chars).is_ok()
    }

    /// Appends a sent message built from `text`.
    ///
    /// # Errors
    /// - `SubmitError::Empty` for blank or whitespace-only input.
    /// - `SubmitError::TooLong` when the trimmed text is over the limit.
    pub fn submit(&mut self, text: &str) -> Result<MessageId, SubmitError> {
        let now = self.clock.now_ms();
        self.append(Direction::Sent, text, now)
    }

    /// Appends a message at mount time with an explicit timestamp.
    pub fn seed(
        &mut self,
        direction: Direction,
        text: &str,
        created_at: EpochMillis,
    ) -> Result<MessageId, SubmitError> {
        self.append(direction, text, created_at)
    }

    fn append(
        &mut self,
        direction: Direction,
        text: &str,
        created_at: EpochMillis,
    ) -> Result<MessageId, SubmitError> {
        let text = normalize_message_text(text, self.max_chars)?;
        let message = Message {
            id: Uuid::new_v4(),
            text: text.to_string(),
            created_at,
            direction,
            seq: self.next_seq,
        };
        let id = message.id;
        self.next_seq += 1;

        debug!(
            "event=message_append module=thread status=ok direction={} chars={} seq={}",
            direction.as_str(),
            text.chars().count(),
            message.seq
        );
        self.messages.push(message);
        self.changes.notify(id);
        Ok(id)
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    /// Registers an observer receiving the id of each appended message.
    pub fn subscribe(&mut self, observer: impl FnMut(&MessageId) + Send + 'static) {
        self.changes.subscribe(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::MessageThread;
    use crate::clock::ManualClock;
    use crate::model::message::{Direction, SubmitError};

    #[test]
    fn submit_stamps_current_time_and_trims() {
        let clock = ManualClock::new(42);
        let mut thread = MessageThread::new(clock, 500);

        let id = thread.submit("  miss you  ").unwrap();
        let message = thread.get(id).unwrap();
        assert_eq!(message.text, "miss you");
        assert_eq!(message.created_at, 42);
        assert_eq!(message.direction, Direction::Sent);
    }

    #[test]
    fn rejected_submit_keeps_revision() {
        let mut thread = MessageThread::new(ManualClock::new(0), 3);
        assert_eq!(
            thread.submit("four"),
            Err(SubmitError::TooLong { chars: 4, max: 3 })
        );
        assert_eq!(thread.revision(), 0);
        assert!(!thread.can_submit("  "));
        assert!(thread.can_submit("ok"));
    }
}
