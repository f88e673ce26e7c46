//! Session configuration.
//!
//! # Responsibility
//! - Hold the tunable timings and limits used by screen sessions.
//! - Parse the JSON form passed in by the shell.
//!
//! # Invariants
//! - Every field has a default; an empty document yields defaults.
//! - A config returned by `from_json` has already passed `validate`.

use crate::model::message::MESSAGE_MAX_CHARS;
use crate::store::ephemeral::{DEFAULT_CASCADE_STEP_MS, DEFAULT_TOKEN_TTL_MS};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunables for one app session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// How long a floating heart stays on screen.
    pub heart_ttl_ms: u64,
    /// Display delay per already-visible heart.
    pub heart_cascade_step_ms: u64,
    /// Upper bound for message text, in chars.
    pub message_max_chars: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            heart_ttl_ms: DEFAULT_TOKEN_TTL_MS,
            heart_cascade_step_ms: DEFAULT_CASCADE_STEP_MS,
            message_max_chars: MESSAGE_MAX_CHARS,
        }
    }
}

/// Config parsing or validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Input is not a valid config document.
    Parse(String),
    /// A field value breaks a config invariant.
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(details) => write!(f, "invalid config: {details}"),
            Self::InvalidValue { field, reason } => {
                write!(f, "invalid config value `{field}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Blank input is treated as `{}`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field invariants.
    ///
    /// # Errors
    /// - `heart_ttl_ms` must be greater than zero.
    /// - `heart_cascade_step_ms` must be below `heart_ttl_ms`.
    /// - `message_max_chars` must be greater than zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heart_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "heart_ttl_ms",
                reason: "must be greater than zero",
            });
        }
        if self.heart_cascade_step_ms >= self.heart_ttl_ms {
            return Err(ConfigError::InvalidValue {
                field: "heart_cascade_step_ms",
                reason: "must be below heart_ttl_ms",
            });
        }
        if self.message_max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "message_max_chars",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};

    #[test]
    fn blank_and_empty_documents_use_defaults() {
        assert_eq!(CoreConfig::from_json("  ").unwrap(), CoreConfig::default());
        assert_eq!(CoreConfig::from_json("{}").unwrap(), CoreConfig::default());
        assert_eq!(CoreConfig::default().heart_ttl_ms, 3_000);
        assert_eq!(CoreConfig::default().message_max_chars, 500);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = CoreConfig::from_json(r#"{"heart_ttl_ms": 1200}"#).unwrap();
        assert_eq!(config.heart_ttl_ms, 1_200);
        assert_eq!(config.heart_cascade_step_ms, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CoreConfig::from_json(r#"{"heart_ttl": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn cascade_must_fit_inside_ttl() {
        let err =
            CoreConfig::from_json(r#"{"heart_ttl_ms": 100, "heart_cascade_step_ms": 100}"#)
                .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "heart_cascade_step_ms",
                reason: "must be below heart_ttl_ms",
            }
        );
    }
}
