//! Core state logic for the LoveNote app.
//! The native shell renders; this crate owns every runtime invariant.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod readiness;
pub mod schedule;
pub mod screen;
pub mod session;
pub mod store;

pub use clock::{Clock, EpochMillis, ManualClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::memory::Memory;
pub use model::message::{Direction, Message, MessageId, SubmitError, MESSAGE_MAX_CHARS};
pub use model::settings::{SettingKey, SettingKeyError, Settings};
pub use model::token::{Token, TokenId};
pub use readiness::{FontLoad, Readiness};
pub use screen::home::{HeartView, HomeScreen, HomeView};
pub use screen::memories::{MemoriesScreen, MemoriesView};
pub use screen::messages::{MessagesScreen, MessagesView};
pub use screen::settings::{NavigationEntry, SettingsScreen, SettingsView};
pub use session::{AppSession, SessionError};
pub use store::ephemeral::{EphemeralStore, TokenChange};
pub use store::gallery::{GalleryError, MemoryGallery};
pub use store::rotation::{RotationError, RotationIndex};
pub use store::thread::MessageThread;

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
