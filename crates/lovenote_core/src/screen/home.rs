//! Home screen: rotating love note and floating hearts.
//!
//! # Invariants
//! - The quote card always shows one of the built-in quotes.
//! - Each "send love" tap adds exactly one heart, gone after the heart TTL.

use crate::catalog::LOVE_QUOTES;
use crate::clock::{Clock, EpochMillis};
use crate::config::CoreConfig;
use crate::model::token::TokenId;
use crate::store::ephemeral::EphemeralStore;
use crate::store::rotation::{RotationError, RotationIndex};
use serde::Serialize;

/// One floating heart as rendered by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeartView {
    pub id: String,
    /// Hidden hearts are waiting for their cascade delay.
    pub revealed: bool,
}

/// Render input for the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub quote: String,
    pub quote_index: usize,
    pub quote_count: usize,
    pub hearts: Vec<HeartView>,
    pub revision: u64,
}

#[derive(Debug)]
pub struct HomeScreen<C: Clock> {
    quotes: RotationIndex<&'static str>,
    hearts: EphemeralStore<C>,
}

impl<C: Clock> HomeScreen<C> {
    /// Creates the home screen over the built-in quotes.
    pub fn new(clock: C, config: &CoreConfig) -> Result<Self, RotationError> {
        Self::with_quotes(clock, config, LOVE_QUOTES.to_vec())
    }

    /// Creates the home screen over a custom quote list.
    pub fn with_quotes(
        clock: C,
        config: &CoreConfig,
        quotes: Vec<&'static str>,
    ) -> Result<Self, RotationError> {
        Ok(Self {
            quotes: RotationIndex::try_new(quotes)?,
            hearts: EphemeralStore::new(clock, config.heart_ttl_ms)
                .with_cascade(config.heart_cascade_step_ms),
        })
    }

    /// Tap on the quote card.
    pub fn next_quote(&mut self) -> &'static str {
        *self.quotes.advance()
    }

    pub fn current_quote(&self) -> &'static str {
        *self.quotes.current()
    }

    /// Tap on the heart button.
    pub fn send_love(&mut self) -> TokenId {
        self.hearts.add()
    }

    /// Fires due heart reveals and expiries.
    pub fn tick(&mut self) -> usize {
        self.hearts.tick()
    }

    pub fn next_deadline(&self) -> Option<EpochMillis> {
        self.hearts.next_deadline()
    }

    pub fn hearts(&self) -> &EphemeralStore<C> {
        &self.hearts
    }

    pub fn hearts_mut(&mut self) -> &mut EphemeralStore<C> {
        &mut self.hearts
    }

    pub fn quotes(&self) -> &RotationIndex<&'static str> {
        &self.quotes
    }

    pub fn revision(&self) -> u64 {
        self.quotes.revision() + self.hearts.revision()
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            quote: self.current_quote().to_string(),
            quote_index: self.quotes.position(),
            quote_count: self.quotes.len(),
            hearts: self
                .hearts
                .tokens()
                .map(|token| HeartView {
                    id: token.id.to_string(),
                    revealed: token.revealed,
                })
                .collect(),
            revision: self.revision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HomeScreen;
    use crate::catalog::LOVE_QUOTES;
    use crate::clock::ManualClock;
    use crate::config::CoreConfig;

    #[test]
    fn view_tracks_quote_and_hearts() {
        let clock = ManualClock::new(0);
        let mut home = HomeScreen::new(clock.clone(), &CoreConfig::default()).unwrap();
        assert_eq!(home.view().quote, LOVE_QUOTES[0]);

        home.next_quote();
        home.send_love();
        home.send_love();

        let view = home.view();
        assert_eq!(view.quote, LOVE_QUOTES[1]);
        assert_eq!(view.quote_index, 1);
        assert_eq!(view.quote_count, LOVE_QUOTES.len());
        assert_eq!(view.hearts.len(), 2);
        assert!(view.hearts[0].revealed);
        assert!(!view.hearts[1].revealed);
        assert_eq!(view.revision, 3);

        clock.set(3_000);
        home.tick();
        assert!(home.view().hearts.is_empty());
    }

    #[test]
    fn custom_quotes_must_not_be_empty() {
        let result = HomeScreen::with_quotes(ManualClock::new(0), &CoreConfig::default(), vec![]);
        assert!(result.is_err());
    }
}
