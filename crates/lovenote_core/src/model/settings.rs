//! User-facing toggle settings.
//!
//! # Responsibility
//! - Hold the session-scoped on/off preferences.
//! - Parse toggle keys coming from the shell.
//!
//! # Invariants
//! - Defaults: notifications on, sound effects on, dark mode off.
//! - Settings live for one session only; nothing is persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Toggle identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    /// Daily love reminders.
    Notifications,
    /// Heart sounds and haptics.
    SoundEffects,
    /// Dark theme.
    DarkMode,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [Self::Notifications, Self::SoundEffects, Self::DarkMode];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::SoundEffects => "sound_effects",
            Self::DarkMode => "dark_mode",
        }
    }
}

/// Unknown toggle key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingKeyError(pub String);

impl Display for SettingKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown setting `{}`; expected notifications|sound_effects|dark_mode",
            self.0
        )
    }
}

impl Error for SettingKeyError {}

impl FromStr for SettingKey {
    type Err = SettingKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "notifications" => Ok(Self::Notifications),
            "sounds" | "sound_effects" => Ok(Self::SoundEffects),
            "darkmode" | "dark_mode" => Ok(Self::DarkMode),
            other => Err(SettingKeyError(other.to_string())),
        }
    }
}

/// Session toggle values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: bool,
    pub sound_effects: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_effects: true,
            dark_mode: false,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Notifications => self.notifications,
            SettingKey::SoundEffects => self.sound_effects,
            SettingKey::DarkMode => self.dark_mode,
        }
    }

    /// Sets one toggle and returns whether the value changed.
    pub fn set(&mut self, key: SettingKey, value: bool) -> bool {
        let slot = match key {
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::SoundEffects => &mut self.sound_effects,
            SettingKey::DarkMode => &mut self.dark_mode,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingKey, Settings};

    #[test]
    fn keys_parse_shell_and_canonical_names() {
        assert_eq!("sounds".parse::<SettingKey>(), Ok(SettingKey::SoundEffects));
        assert_eq!(" DarkMode ".parse::<SettingKey>(), Ok(SettingKey::DarkMode));
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
        assert!("privacy".parse::<SettingKey>().is_err());
    }

    #[test]
    fn set_reports_changes_only() {
        let mut settings = Settings::default();
        assert!(!settings.set(SettingKey::Notifications, true));
        assert!(settings.set(SettingKey::DarkMode, true));
        assert!(settings.get(SettingKey::DarkMode));
    }
}
