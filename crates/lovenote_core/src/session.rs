//! App session: every screen's state for one app run.
//!
//! # Responsibility
//! - Build all screens from one validated config and one clock.
//! - Drive every timer through a single host-called `tick`.
//!
//! # Invariants
//! - Dropping the session cancels every pending timer it owns.
//! - No state survives the session; nothing is persisted.

use crate::clock::{Clock, EpochMillis};
use crate::config::{ConfigError, CoreConfig};
use crate::screen::home::HomeScreen;
use crate::screen::memories::MemoriesScreen;
use crate::screen::messages::MessagesScreen;
use crate::screen::settings::SettingsScreen;
use crate::store::rotation::RotationError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session setup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    Rotation(RotationError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Rotation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Rotation(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RotationError> for SessionError {
    fn from(value: RotationError) -> Self {
        Self::Rotation(value)
    }
}

/// All screen state for one app run.
#[derive(Debug)]
pub struct AppSession<C: Clock + Clone> {
    config: CoreConfig,
    home: HomeScreen<C>,
    messages: MessagesScreen<C>,
    memories: MemoriesScreen,
    settings: SettingsScreen,
}

impl<C: Clock + Clone> AppSession<C> {
    /// Validates `config` and mounts every screen.
    pub fn new(config: CoreConfig, clock: C) -> Result<Self, SessionError> {
        config.validate()?;
        let home = HomeScreen::new(clock.clone(), &config)?;
        let messages = MessagesScreen::new(clock, &config);
        info!(
            "event=session_start module=session status=ok heart_ttl_ms={} message_max_chars={}",
            config.heart_ttl_ms, config.message_max_chars
        );
        Ok(Self {
            config,
            home,
            messages,
            memories: MemoriesScreen::new(),
            settings: SettingsScreen::new(),
        })
    }

    /// Fires every due timer across screens; returns how many fired.
    pub fn tick(&mut self) -> usize {
        self.home.tick()
    }

    /// Earliest time at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<EpochMillis> {
        self.home.next_deadline()
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn home(&self) -> &HomeScreen<C> {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeScreen<C> {
        &mut self.home
    }

    pub fn messages(&self) -> &MessagesScreen<C> {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessagesScreen<C> {
        &mut self.messages
    }

    pub fn memories(&self) -> &MemoriesScreen {
        &self.memories
    }

    pub fn memories_mut(&mut self) -> &mut MemoriesScreen {
        &mut self.memories
    }

    pub fn settings(&self) -> &SettingsScreen {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsScreen {
        &mut self.settings
    }
}
