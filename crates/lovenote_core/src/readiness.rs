//! App readiness evaluation.
//!
//! # Responsibility
//! - Turn font-loading progress into an explicit "ready to render" result.
//!
//! # Invariants
//! - A font failure still yields `Ready`; the shell falls back to system fonts.
//! - Readiness is a returned value; core keeps no global ready flag.

use log::{info, warn};
use serde::Serialize;

const MAX_REASON_CHARS: usize = 160;

/// Font loading progress reported by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontLoad {
    Pending,
    Loaded,
    Failed(String),
}

impl FontLoad {
    /// Builds a status from the shell's `(loaded, error)` pair.
    pub fn from_shell(loaded: bool, error: Option<String>) -> Self {
        match (loaded, error) {
            (_, Some(reason)) => Self::Failed(reason),
            (true, None) => Self::Loaded,
            (false, None) => Self::Pending,
        }
    }
}

/// Whether the splash screen may be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Readiness {
    Pending,
    Ready {
        /// Bundled fonts failed; render with platform defaults.
        fonts_fallback: bool,
    },
}

impl Readiness {
    /// Evaluates readiness for the given font status.
    pub fn evaluate(fonts: &FontLoad) -> Self {
        match fonts {
            FontLoad::Pending => Self::Pending,
            FontLoad::Loaded => {
                info!("event=app_ready module=readiness status=ok fonts=loaded");
                Self::Ready {
                    fonts_fallback: false,
                }
            }
            FontLoad::Failed(reason) => {
                let reason: String = reason
                    .replace(['\n', '\r'], " ")
                    .chars()
                    .take(MAX_REASON_CHARS)
                    .collect();
                warn!(
                    "event=app_ready module=readiness status=degraded fonts=failed reason={}",
                    reason
                );
                Self::Ready {
                    fonts_fallback: true,
                }
            }
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{FontLoad, Readiness};

    #[test]
    fn pending_fonts_keep_splash() {
        let readiness = Readiness::evaluate(&FontLoad::from_shell(false, None));
        assert_eq!(readiness, Readiness::Pending);
        assert!(!readiness.is_ready());
    }

    #[test]
    fn loaded_or_failed_fonts_are_ready() {
        assert_eq!(
            Readiness::evaluate(&FontLoad::Loaded),
            Readiness::Ready {
                fonts_fallback: false
            }
        );
        let failed = FontLoad::from_shell(true, Some("asset missing".to_string()));
        assert_eq!(
            Readiness::evaluate(&failed),
            Readiness::Ready {
                fonts_fallback: true
            }
        );
    }

    #[test]
    fn readiness_serializes_with_state_tag() {
        let json = serde_json::to_value(Readiness::Ready {
            fonts_fallback: true,
        })
        .unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["fonts_fallback"], true);
    }
}
