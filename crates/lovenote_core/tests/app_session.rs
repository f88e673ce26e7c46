use lovenote_core::catalog::{LOVE_QUOTES, SEED_MESSAGES};
use lovenote_core::{
    AppSession, ConfigError, CoreConfig, GalleryError, ManualClock, SessionError, SettingKey,
    TokenChange,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn session_at(start_ms: i64) -> (ManualClock, AppSession<ManualClock>) {
    let clock = ManualClock::new(start_ms);
    let session = AppSession::new(CoreConfig::default(), clock.clone()).unwrap();
    (clock, session)
}

#[test]
fn new_session_mounts_every_screen() {
    let (_, session) = session_at(50_000_000);

    assert_eq!(session.home().current_quote(), LOVE_QUOTES[0]);
    assert!(session.home().hearts().is_empty());
    assert_eq!(session.messages().thread().len(), SEED_MESSAGES.len());
    assert_eq!(session.memories().view().memories.len(), 4);
    assert!(session.settings().settings().notifications);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn invalid_config_is_rejected_at_setup() {
    let config = CoreConfig {
        heart_ttl_ms: 0,
        ..CoreConfig::default()
    };
    let err = AppSession::new(config, ManualClock::new(0)).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Config(ConfigError::InvalidValue {
            field: "heart_ttl_ms",
            ..
        })
    ));
}

#[test]
fn session_tick_drives_heart_lifecycle() {
    let (clock, mut session) = session_at(0);
    let heart = session.home_mut().send_love();
    assert_eq!(session.next_deadline(), Some(3_000));

    clock.set(2_999);
    assert_eq!(session.tick(), 0);
    assert!(session.home().hearts().contains(heart));

    clock.set(3_000);
    assert_eq!(session.tick(), 1);
    assert!(!session.home().hearts().contains(heart));
}

#[test]
fn screens_report_revisions_independently() {
    let (_, mut session) = session_at(0);
    let home_before = session.home().view().revision;
    let messages_before = session.messages().view().revision;

    session.home_mut().next_quote();
    session.messages_mut().submit("hello").unwrap();
    session.memories_mut().open("3").unwrap();
    session.settings_mut().toggle(SettingKey::SoundEffects);

    assert_eq!(session.home().view().revision, home_before + 1);
    assert_eq!(session.messages().view().revision, messages_before + 1);
    assert_eq!(session.memories().view().revision, 1);
    assert_eq!(session.settings().view().revision, 1);
}

#[test]
fn memories_detail_view_opens_and_closes() {
    let (_, mut session) = session_at(0);
    let memories = session.memories_mut();

    assert_eq!(memories.open("1").unwrap().title, "Our First Date");
    assert_eq!(
        memories.view().selected.map(|m| m.id),
        Some("1".to_string())
    );
    assert_eq!(
        memories.open("missing").unwrap_err(),
        GalleryError::UnknownMemory("missing".to_string())
    );
    assert!(memories.close());
    assert!(memories.view().selected.is_none());
}

#[test]
fn views_serialize_for_the_shell() {
    let (_, mut session) = session_at(0);
    session.home_mut().send_love();

    let home = serde_json::to_value(session.home().view()).unwrap();
    assert_eq!(home["quote"], LOVE_QUOTES[0]);
    assert_eq!(home["hearts"][0]["revealed"], true);

    let settings = serde_json::to_value(session.settings().view()).unwrap();
    assert_eq!(settings["settings"]["dark_mode"], false);
    assert_eq!(settings["navigation"][0]["id"], "privacy");

    let messages = serde_json::to_value(session.messages().view()).unwrap();
    assert_eq!(messages["max_chars"], 500);
    assert_eq!(messages["messages"][0]["type"], "received");
}

#[test]
fn cancel_pending_stops_pending_hearts() {
    let (clock, mut session) = session_at(0);
    for _ in 0..4 {
        session.home_mut().send_love();
    }
    assert_eq!(session.home().hearts().pending_timers(), 7);

    let hearts = session.home_mut().hearts_mut();
    assert_eq!(hearts.cancel_pending(), 7);
    assert_eq!(hearts.pending_timers(), 0);
    clock.set(10_000);
    assert_eq!(session.tick(), 0);
    assert_eq!(session.home().hearts().len(), 4);
}

#[test]
fn dropping_session_never_expires_hearts() {
    let (clock, mut session) = session_at(0);
    let expired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&expired);
    session.home_mut().hearts_mut().subscribe(move |change| {
        if matches!(change, TokenChange::Expired(_)) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    session.home_mut().send_love();
    session.home_mut().send_love();

    drop(session);
    clock.set(10_000);

    assert_eq!(expired.load(Ordering::SeqCst), 0);
    assert_eq!(Arc::strong_count(&expired), 1);
}
