//! FFI screen API for the Flutter shell.
//!
//! # Responsibility
//! - Expose one process-wide `AppSession` to Dart via FRB.
//! - Flatten core results into plain response envelopes.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every state-bearing response carries the screen `revision`.
//! - Snapshot calls fire due timers first, so views are never stale.

use lovenote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppSession, CoreConfig, FontLoad, HomeView, MemoriesView, Memory, Message, MessagesView,
    Readiness, SettingKey, SettingsView, SubmitError, SystemClock,
};
use log::warn;
use std::sync::{Mutex, PoisonError};

type Session = AppSession<SystemClock>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking; UI-thread safe.
/// - Never throws; always returns the UTF-8 string `"pong"`.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking; UI-thread safe.
/// - Never throws; always returns the `lovenote_core` version as UTF-8.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - `level`: `trace|debug|info|warn|error`, case-insensitive.
/// - `log_dir`: absolute directory for rolling log files.
/// - Returns an empty string on success, the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Replaces the running session with one built from `config_json`.
///
/// # FFI contract
/// - Blank input means default config.
/// - On error the current session is left untouched.
/// - Dropping the old session cancels its pending timers.
/// - Returns an empty string on success, the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_session(config_json: String) -> String {
    let session = CoreConfig::from_json(config_json.as_str())
        .map_err(|err| err.to_string())
        .and_then(|config| {
            AppSession::new(config, SystemClock::new()).map_err(|err| err.to_string())
        });
    match session {
        Ok(session) => {
            *lock_session() = Some(session);
            String::new()
        }
        Err(err) => {
            warn!("event=session_configure module=ffi status=error");
            err
        }
    }
}

/// Splash-screen gate response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyResponse {
    pub ready: bool,
    /// Bundled fonts failed; render with platform fonts.
    pub fonts_fallback: bool,
}

/// Evaluates whether the shell may hide its splash screen.
#[flutter_rust_bridge::frb(sync)]
pub fn app_ready(fonts_loaded: bool, font_error: Option<String>) -> ReadyResponse {
    match Readiness::evaluate(&FontLoad::from_shell(fonts_loaded, font_error)) {
        Readiness::Pending => ReadyResponse {
            ready: false,
            fonts_fallback: false,
        },
        Readiness::Ready { fonts_fallback } => ReadyResponse {
            ready: true,
            fonts_fallback,
        },
    }
}

/// Timer pump result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResponse {
    pub fired: u32,
    /// When the shell should call `tick` again, if anything is pending.
    pub next_deadline_ms: Option<i64>,
    pub message: String,
}

/// Fires every due timer. Intended to be called from the shell's frame loop.
#[flutter_rust_bridge::frb(sync)]
pub fn tick() -> TickResponse {
    match with_session(|session| (session.tick(), session.next_deadline())) {
        Ok((fired, next_deadline_ms)) => TickResponse {
            fired: clamp_u32(fired),
            next_deadline_ms,
            message: String::new(),
        },
        Err(err) => TickResponse {
            fired: 0,
            next_deadline_ms: None,
            message: format!("tick failed: {err}"),
        },
    }
}

/// Floating heart item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartItem {
    pub id: String,
    pub revealed: bool,
}

/// Home screen state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeResponse {
    pub quote: String,
    pub quote_index: u32,
    pub quote_count: u32,
    pub hearts: Vec<HeartItem>,
    pub revision: u64,
    /// Empty unless the call failed.
    pub message: String,
}

impl HomeResponse {
    fn from_view(view: HomeView) -> Self {
        Self {
            quote: view.quote,
            quote_index: clamp_u32(view.quote_index),
            quote_count: clamp_u32(view.quote_count),
            hearts: view
                .hearts
                .into_iter()
                .map(|heart| HeartItem {
                    id: heart.id,
                    revealed: heart.revealed,
                })
                .collect(),
            revision: view.revision,
            message: String::new(),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            quote: String::new(),
            quote_index: 0,
            quote_count: 0,
            hearts: Vec::new(),
            revision: 0,
            message,
        }
    }
}

/// Tap on the love-note card.
#[flutter_rust_bridge::frb(sync)]
pub fn home_next_quote() -> HomeResponse {
    home_response("home_next_quote", |session| {
        session.home_mut().next_quote();
    })
}

/// Tap on the "Send Love" heart button.
#[flutter_rust_bridge::frb(sync)]
pub fn home_send_love() -> HomeResponse {
    home_response("home_send_love", |session| {
        session.home_mut().send_love();
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn home_snapshot() -> HomeResponse {
    home_response("home_snapshot", |_| {})
}

fn home_response(op: &str, f: impl FnOnce(&mut Session)) -> HomeResponse {
    match with_session(|session| {
        session.tick();
        f(session);
        session.home().view()
    }) {
        Ok(view) => HomeResponse::from_view(view),
        Err(err) => HomeResponse::failure(format!("{op} failed: {err}")),
    }
}

/// Message thread item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageItem {
    pub id: String,
    pub text: String,
    pub created_at_ms: i64,
    /// `sent|received`.
    pub direction: String,
    pub seq: u64,
}

impl From<Message> for MessageItem {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            text: message.text,
            created_at_ms: message.created_at,
            direction: message.direction.as_str().to_string(),
            seq: message.seq,
        }
    }
}

/// Messages screen state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesResponse {
    pub items: Vec<MessageItem>,
    pub max_chars: u32,
    pub revision: u64,
    pub message: String,
}

impl MessagesResponse {
    fn from_view(view: MessagesView) -> Self {
        Self {
            items: view.messages.into_iter().map(MessageItem::from).collect(),
            max_chars: clamp_u32(view.max_chars),
            revision: view.revision,
            message: String::new(),
        }
    }
}

/// Result of a send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    /// `false` when the input was declined; the thread is unchanged.
    pub ok: bool,
    pub message_id: Option<String>,
    pub message: String,
}

/// Send button press.
///
/// # FFI contract
/// - Blank input is declined with `ok=false`; nothing is appended.
/// - Over-limit input is declined with `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn messages_submit(text: String) -> SubmitResponse {
    match with_session(|session| session.messages_mut().submit(text.as_str())) {
        Ok(Ok(id)) => SubmitResponse {
            ok: true,
            message_id: Some(id.to_string()),
            message: "Message sent.".to_string(),
        },
        Ok(Err(SubmitError::Empty)) => SubmitResponse {
            ok: false,
            message_id: None,
            message: String::new(),
        },
        Ok(Err(err)) => SubmitResponse {
            ok: false,
            message_id: None,
            message: err.to_string(),
        },
        Err(err) => SubmitResponse {
            ok: false,
            message_id: None,
            message: format!("messages_submit failed: {err}"),
        },
    }
}

/// Whether the send button is enabled for the current draft.
#[flutter_rust_bridge::frb(sync)]
pub fn messages_can_submit(draft: String) -> bool {
    with_session(|session| session.messages().can_submit(draft.as_str())).unwrap_or(false)
}

#[flutter_rust_bridge::frb(sync)]
pub fn messages_snapshot() -> MessagesResponse {
    match with_session(|session| session.messages().view()) {
        Ok(view) => MessagesResponse::from_view(view),
        Err(err) => MessagesResponse {
            items: Vec::new(),
            max_chars: 0,
            revision: 0,
            message: format!("messages_snapshot failed: {err}"),
        },
    }
}

/// Memory grid item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub image_url: String,
    pub description: String,
}

impl From<Memory> for MemoryItem {
    fn from(memory: Memory) -> Self {
        Self {
            id: memory.id,
            title: memory.title,
            date: memory.date,
            image_url: memory.image,
            description: memory.description,
        }
    }
}

/// Memories screen state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoriesResponse {
    pub ok: bool,
    pub items: Vec<MemoryItem>,
    /// Set while the detail view is open.
    pub selected_id: Option<String>,
    pub revision: u64,
    pub message: String,
}

impl MemoriesResponse {
    fn from_view(view: MemoriesView, ok: bool, message: String) -> Self {
        Self {
            ok,
            items: view.memories.into_iter().map(MemoryItem::from).collect(),
            selected_id: view.selected.map(|memory| memory.id),
            revision: view.revision,
            message,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            selected_id: None,
            revision: 0,
            message,
        }
    }
}

/// Tap on a memory tile.
#[flutter_rust_bridge::frb(sync)]
pub fn memories_select(memory_id: String) -> MemoriesResponse {
    match with_session(|session| {
        let outcome = session
            .memories_mut()
            .open(memory_id.as_str())
            .map(|_| ())
            .map_err(|err| err.to_string());
        (outcome, session.memories().view())
    }) {
        Ok((Ok(()), view)) => MemoriesResponse::from_view(view, true, String::new()),
        Ok((Err(err), view)) => MemoriesResponse::from_view(view, false, err),
        Err(err) => MemoriesResponse::failure(format!("memories_select failed: {err}")),
    }
}

/// Back button in the memory detail view.
#[flutter_rust_bridge::frb(sync)]
pub fn memories_clear_selection() -> MemoriesResponse {
    match with_session(|session| {
        session.memories_mut().close();
        session.memories().view()
    }) {
        Ok(view) => MemoriesResponse::from_view(view, true, String::new()),
        Err(err) => MemoriesResponse::failure(format!("memories_clear_selection failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn memories_snapshot() -> MemoriesResponse {
    match with_session(|session| session.memories().view()) {
        Ok(view) => MemoriesResponse::from_view(view, true, String::new()),
        Err(err) => MemoriesResponse::failure(format!("memories_snapshot failed: {err}")),
    }
}

/// Settings screen state envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsResponse {
    pub ok: bool,
    pub notifications: bool,
    pub sound_effects: bool,
    pub dark_mode: bool,
    pub revision: u64,
    pub message: String,
}

impl SettingsResponse {
    fn from_view(view: SettingsView, ok: bool, message: String) -> Self {
        Self {
            ok,
            notifications: view.settings.notifications,
            sound_effects: view.settings.sound_effects,
            dark_mode: view.settings.dark_mode,
            revision: view.revision,
            message,
        }
    }
}

/// Flips one toggle by key (`notifications|sounds|darkmode` or canonical names).
#[flutter_rust_bridge::frb(sync)]
pub fn settings_toggle(key: String) -> SettingsResponse {
    let parsed = key.parse::<SettingKey>();
    match with_session(|session| {
        let outcome = parsed.map(|key| {
            session.settings_mut().toggle(key);
        });
        (outcome, session.settings().view())
    }) {
        Ok((Ok(()), view)) => SettingsResponse::from_view(view, true, String::new()),
        Ok((Err(err), view)) => SettingsResponse::from_view(view, false, err.to_string()),
        Err(err) => SettingsResponse::from_view(
            SettingsView {
                settings: Default::default(),
                navigation: Vec::new(),
                revision: 0,
            },
            false,
            format!("settings_toggle failed: {err}"),
        ),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_snapshot() -> SettingsResponse {
    match with_session(|session| session.settings().view()) {
        Ok(view) => SettingsResponse::from_view(view, true, String::new()),
        Err(err) => SettingsResponse {
            ok: false,
            notifications: false,
            sound_effects: false,
            dark_mode: false,
            revision: 0,
            message: format!("settings_snapshot failed: {err}"),
        },
    }
}

fn lock_session() -> std::sync::MutexGuard<'static, Option<Session>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Result<R, String> {
    let mut guard = lock_session();
    if guard.is_none() {
        let session = AppSession::new(CoreConfig::default(), SystemClock::new())
            .map_err(|err| err.to_string())?;
        *guard = Some(session);
    }
    match guard.as_mut() {
        Some(session) => Ok(f(session)),
        None => Err("session unavailable".to_string()),
    }
}

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
