//! Messages screen: local love-message thread.
//!
//! # Invariants
//! - The thread is seeded once, at mount, relative to the mount time.
//! - Only trimmed, non-empty, in-limit text is ever appended.

use crate::catalog::SEED_MESSAGES;
use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::model::message::{Message, MessageId, SubmitError};
use crate::store::thread::MessageThread;
use log::warn;
use serde::Serialize;

/// Render input for the messages screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagesView {
    pub messages: Vec<Message>,
    pub max_chars: usize,
    pub revision: u64,
}

#[derive(Debug)]
pub struct MessagesScreen<C: Clock> {
    thread: MessageThread<C>,
}

impl<C: Clock> MessagesScreen<C> {
    /// Mounts the screen and seeds the built-in conversation.
    ///
    /// Seed messages that do not fit the configured limit are skipped.
    pub fn new(clock: C, config: &CoreConfig) -> Self {
        let mounted_at = clock.now_ms();
        let mut thread = MessageThread::new(clock, config.message_max_chars);
        for seed in SEED_MESSAGES {
            let age = i64::try_from(seed.age_ms).unwrap_or(i64::MAX);
            let created_at = mounted_at.saturating_sub(age);
            if let Err(err) = thread.seed(seed.direction, seed.text, created_at) {
                warn!(
                    "event=message_seed module=messages status=skipped reason={}",
                    err
                );
            }
        }
        Self { thread }
    }

    /// Whether the send button is enabled for `draft`.
    pub fn can_submit(&self, draft: &str) -> bool {
        self.thread.can_submit(draft)
    }

    /// Send button press.
    pub fn submit(&mut self, text: &str) -> Result<MessageId, SubmitError> {
        self.thread.submit(text)
    }

    pub fn thread(&self) -> &MessageThread<C> {
        &self.thread
    }

    pub fn thread_mut(&mut self) -> &mut MessageThread<C> {
        &mut self.thread
    }

    pub fn view(&self) -> MessagesView {
        MessagesView {
            messages: self.thread.messages().to_vec(),
            max_chars: self.thread.max_chars(),
            revision: self.thread.revision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MessagesScreen;
    use crate::catalog::SEED_MESSAGES;
    use crate::clock::ManualClock;
    use crate::config::CoreConfig;

    #[test]
    fn mount_seeds_relative_to_mount_time() {
        let screen = MessagesScreen::new(ManualClock::new(10_000_000), &CoreConfig::default());
        let messages = screen.thread().messages();

        assert_eq!(messages.len(), SEED_MESSAGES.len());
        assert_eq!(messages[0].created_at, 10_000_000 - 3_600_000);
        assert_eq!(messages[2].created_at, 10_000_000 - 1_800_000);
        assert!(messages.windows(2).all(|w| w[0].seq < w[1].seq));
    }

    #[test]
    fn seeds_over_the_limit_are_skipped() {
        let config = CoreConfig {
            message_max_chars: 5,
            ..CoreConfig::default()
        };
        let screen = MessagesScreen::new(ManualClock::new(0), &config);
        assert!(screen.thread().is_empty());
        assert_eq!(screen.view().max_chars, 5);
    }
}
