//! Logging bootstrap for the love-note core.
//!
//! # Responsibility
//! - Start one rolling file logger per process for the app shell.
//! - Keep emitted events metadata-only: message text is never logged.
//!
//! # Invariants
//! - Repeated init with the same level and directory is a no-op.
//! - Init never panics; failures come back as `LoggingError`.
//! - A running logger is never reconfigured.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "lovenote";
const ROTATE_AT_BYTES: u64 = 2 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_PAYLOAD_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LogLevel,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `Debug` for debug builds, `Info` for release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::UnsupportedLevel(other.to_string())),
        }
    }
}

/// Logging setup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    /// Directory is blank or not absolute.
    InvalidDir(String),
    /// Logging already runs with another level or directory.
    Conflict { active: String, requested: String },
    /// Directory creation or backend start failed.
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDir(details) => write!(f, "invalid log_dir: {details}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already active with `{active}`; refusing to switch to `{requested}`"
            ),
            Self::Backend(details) => write!(f, "logger setup failed: {details}"),
        }
    }
}

impl Error for LoggingError {}

/// Starts rolling file logs under `log_dir` at `level`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging already runs with a different level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = level.parse::<LogLevel>()?;
    let dir = parse_log_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start_logger(level, &dir))?;
    ensure_same_config(active, level, &dir)
}

/// Active `(level, log_dir)`, or `None` before init.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    ACTIVE.get().map(|active| (active.level, active.dir.clone()))
}

/// Default level name for the current build.
pub fn default_log_level() -> &'static str {
    LogLevel::for_build().as_str()
}

fn start_logger(level: LogLevel, dir: &Path) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|err| {
        LoggingError::Backend(format!("cannot create `{}`: {err}", dir.display()))
    })?;

    let handle = Logger::try_with_str(level.as_str())
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook();
    info!(
        "event=logging_start module=logging status=ok platform={} debug_build={} version={} level={}",
        std::env::consts::OS,
        cfg!(debug_assertions),
        env!("CARGO_PKG_VERSION"),
        level.as_str()
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn ensure_same_config(
    active: &ActiveLogger,
    level: LogLevel,
    dir: &Path,
) -> Result<(), LoggingError> {
    if active.dir != dir {
        return Err(LoggingError::Conflict {
            active: active.dir.display().to_string(),
            requested: dir.display().to_string(),
        });
    }
    if active.level != level {
        return Err(LoggingError::Conflict {
            active: active.level.as_str().to_string(),
            requested: level.as_str().to_string(),
        });
    }
    Ok(())
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidDir("path is empty".to_string()));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidDir(format!(
            "`{trimmed}` is not absolute"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        // Payload may quote message text; strip newlines and cap length.
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string payload".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            flatten_and_cap(&payload, PANIC_PAYLOAD_MAX_CHARS)
        );
        previous(panic_info);
    }));
}

fn flatten_and_cap(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    let mut capped: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}
