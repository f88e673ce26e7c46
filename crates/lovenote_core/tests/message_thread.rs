use lovenote_core::{Direction, ManualClock, MessageThread, SubmitError, MESSAGE_MAX_CHARS};

#[test]
fn submitted_messages_keep_submission_order() {
    let clock = ManualClock::new(0);
    let mut thread = MessageThread::new(clock.clone(), MESSAGE_MAX_CHARS);

    for text in ["a", "b", "c"] {
        thread.submit(text).unwrap();
        clock.advance(1);
    }

    let texts: Vec<_> = thread.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
    assert!(thread
        .messages()
        .iter()
        .all(|m| m.direction == Direction::Sent));
    let seqs: Vec<_> = thread.messages().iter().map(|m| m.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2]);
}

#[test]
fn blank_submits_leave_thread_unchanged() {
    let mut thread = MessageThread::new(ManualClock::new(0), MESSAGE_MAX_CHARS);
    thread.submit("hello").unwrap();
    let before = thread.messages().to_vec();

    assert_eq!(thread.submit(""), Err(SubmitError::Empty));
    assert_eq!(thread.submit("   "), Err(SubmitError::Empty));
    assert_eq!(thread.submit("\n\t"), Err(SubmitError::Empty));

    assert_eq!(thread.messages(), before.as_slice());
    assert_eq!(thread.revision(), 1);
}

#[test]
fn over_limit_submit_is_rejected() {
    let mut thread = MessageThread::new(ManualClock::new(0), MESSAGE_MAX_CHARS);
    let long = "x".repeat(MESSAGE_MAX_CHARS + 1);

    let err = thread.submit(&long).unwrap_err();
    assert_eq!(
        err,
        SubmitError::TooLong {
            chars: MESSAGE_MAX_CHARS + 1,
            max: MESSAGE_MAX_CHARS,
        }
    );
    assert!(thread.is_empty());
    assert!(thread.can_submit(&"x".repeat(MESSAGE_MAX_CHARS)));
}

#[test]
fn seeded_messages_precede_later_submissions() {
    let clock = ManualClock::new(5_000);
    let mut thread = MessageThread::new(clock, MESSAGE_MAX_CHARS);
    thread.seed(Direction::Received, "good morning", 1_000).unwrap();
    thread.submit("hi!").unwrap();

    let messages = thread.messages();
    assert_eq!(messages[0].direction, Direction::Received);
    assert_eq!(messages[0].created_at, 1_000);
    assert_eq!(messages[1].direction, Direction::Sent);
    assert_eq!(messages[1].created_at, 5_000);
}

#[test]
fn message_serialization_uses_expected_wire_fields() {
    let mut thread = MessageThread::new(ManualClock::new(7), MESSAGE_MAX_CHARS);
    let id = thread.submit("love you").unwrap();

    let json = serde_json::to_value(thread.get(id).unwrap()).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "love you");
    assert_eq!(json["created_at"], 7);
    assert_eq!(json["type"], "sent");
    assert_eq!(json["seq"], 0);
}
