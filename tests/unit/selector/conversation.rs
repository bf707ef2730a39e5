use super::*;

fn chunk(s: &str) -> ConversationEvent {
    ConversationEvent::ResponseChunk(s.to_string())
}

#[test]
fn full_exchange_settles_to_neutral() {
    let mut sel = ExpressionSelector::default();
    let user = ConversationEvent::UserMessage("what is rust".into());
    assert_eq!(sel.handle(0.0, &user), Some(ExpressionId::Listening));
    assert!(sel.is_in_flight());
    assert_eq!(
        sel.handle(1.0, &ConversationEvent::ResponseStarted),
        Some(ExpressionId::Speaking)
    );
    // Plain speech keeps the speaking face.
    assert_eq!(sel.handle(1.2, &chunk("Rust is")), None);
    assert_eq!(
        sel.handle(1.4, &chunk("Rust is great")),
        Some(ExpressionId::Happy)
    );
    assert_eq!(
        sel.handle(2.0, &ConversationEvent::ResponseFinished("Rust is great".into())),
        None
    );
    assert!(!sel.is_in_flight());

    assert_eq!(sel.tick(4.9), None);
    assert_eq!(sel.tick(5.0), Some(ExpressionId::Neutral));
    assert_eq!(sel.tick(5.1), None);
}

#[test]
fn new_message_cancels_pending_settle() {
    let mut sel = ExpressionSelector::default();
    sel.handle(0.0, &ConversationEvent::UserMessage("hey".into()));
    sel.handle(1.0, &ConversationEvent::ResponseFailed);
    assert_eq!(sel.current(), ExpressionId::Sad);

    assert_eq!(
        sel.handle(2.0, &ConversationEvent::UserMessage("again".into())),
        Some(ExpressionId::Listening)
    );
    assert_eq!(sel.tick(4.5), None);
    assert_eq!(sel.current(), ExpressionId::Listening);
}

#[test]
fn messages_during_a_response_are_dropped() {
    let mut sel = ExpressionSelector::default();
    sel.handle(0.0, &ConversationEvent::UserMessage("first".into()));
    sel.handle(1.0, &ConversationEvent::ResponseStarted);
    assert_eq!(
        sel.handle(1.5, &ConversationEvent::UserMessage("another".into())),
        None
    );
    assert_eq!(sel.current(), ExpressionId::Speaking);
    assert!(sel.is_in_flight());

    // The dropped message does not count as activity.
    assert_eq!(sel.tick(6.2), Some(ExpressionId::Neutral));
}

#[test]
fn blank_messages_are_ignored() {
    let mut sel = ExpressionSelector::default();
    assert_eq!(
        sel.handle(0.0, &ConversationEvent::UserMessage("   ".into())),
        None
    );
    assert!(!sel.is_in_flight());
}

#[test]
fn idle_fallback_returns_to_neutral() {
    let mut sel = ExpressionSelector::default();
    assert_eq!(
        sel.handle(0.0, &ConversationEvent::Thinking),
        Some(ExpressionId::Thinking)
    );
    assert_eq!(sel.tick(5.0), None);
    assert_eq!(sel.tick(5.01), Some(ExpressionId::Neutral));
}

#[test]
fn events_roundtrip_through_json() {
    let ev: ConversationEvent =
        serde_json::from_str(r#"{"event":"response_finished","text":"bye"}"#).unwrap();
    assert_eq!(ev, ConversationEvent::ResponseFinished("bye".into()));
    let ev: ConversationEvent = serde_json::from_str(r#"{"event":"listening"}"#).unwrap();
    assert_eq!(ev, ConversationEvent::Listening);
}
