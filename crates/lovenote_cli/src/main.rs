//! CLI smoke run.
//!
//! # Responsibility
//! - Verify `lovenote_core` linkage without the Flutter shell.
//! - Replay a short scripted session on a manual clock so the heart
//!   timeline is deterministic.

use lovenote_core::{AppSession, CoreConfig, ManualClock};

fn main() {
    println!("lovenote_core ping={}", lovenote_core::ping());
    println!("lovenote_core version={}", lovenote_core::core_version());

    let clock = ManualClock::new(0);
    let mut session = match AppSession::new(CoreConfig::default(), clock.clone()) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("session setup failed: {err}");
            std::process::exit(1);
        }
    };

    println!("t=0 quote={:?}", session.home().current_quote());
    session.home_mut().send_love();
    clock.advance(500);
    session.home_mut().send_love();
    println!("t=500 hearts={}", session.home().hearts().len());

    for at in [2_999, 3_000, 3_500] {
        clock.set(at);
        let fired = session.tick();
        println!(
            "t={at} fired={fired} hearts={}",
            session.home().hearts().len()
        );
    }

    session.home_mut().next_quote();
    println!("quote={:?}", session.home().current_quote());

    match session.messages_mut().submit("   ") {
        Ok(_) => println!("blank submit accepted"),
        Err(err) => println!("blank submit declined: {err}"),
    }
    if let Ok(id) = session.messages_mut().submit("see you soon") {
        println!(
            "thread len={} last={id}",
            session.messages().thread().len()
        );
    }
}
