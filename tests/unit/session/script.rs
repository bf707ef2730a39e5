use super::*;

const SAMPLE: &str = r#"{
    "controller": { "seed": 7 },
    "cues": [
        { "at": 2.0, "action": "gesture", "gesture": "nod" },
        { "at": 0.5, "action": "expression", "expression": "greeting" },
        { "at": 2.0, "action": "gesture", "gesture": "shake", "duration_ms": 400 },
        { "at": 3.0, "action": "conversation", "event": { "event": "user_message", "text": "hi" } }
    ]
}"#;

#[test]
fn parses_all_cue_kinds() {
    let script = Script::from_json_str(SAMPLE).unwrap();
    assert_eq!(script.controller.seed, 7);
    assert_eq!(script.cues.len(), 4);
    assert_eq!(
        script.cues[2].action,
        CueAction::Gesture {
            gesture: GestureKind::Shake,
            duration_ms: Some(400)
        }
    );
    assert_eq!(
        script.cues[3].action,
        CueAction::Conversation {
            event: ConversationEvent::UserMessage("hi".into())
        }
    );
}

#[test]
fn sorting_is_stable_by_time() {
    let script = Script::from_json_str(SAMPLE).unwrap();
    let sorted = script.sorted_cues();
    let times: Vec<f64> = sorted.iter().map(|c| c.at).collect();
    assert_eq!(times, vec![0.5, 2.0, 2.0, 3.0]);
    assert!(matches!(
        sorted[1].action,
        CueAction::Gesture {
            gesture: GestureKind::Nod,
            ..
        }
    ));
}

#[test]
fn rejects_negative_times_and_unknown_names() {
    assert!(
        Script::from_json_str(
            r#"{"cues":[{"at":-1,"action":"expression","expression":"happy"}]}"#
        )
        .is_err()
    );
    assert!(
        Script::from_json_str(
            r#"{"cues":[{"at":1,"action":"expression","expression":"furious"}]}"#
        )
        .is_err()
    );
    assert!(Script::from_json_str(r#"{"selector":{"idle_after":0}}"#).is_err());
}

#[test]
fn empty_document_is_an_empty_script() {
    let script = Script::from_json_str("{}").unwrap();
    assert!(script.cues.is_empty());
    assert_eq!(script.controller, ControllerConfig::default());
}
