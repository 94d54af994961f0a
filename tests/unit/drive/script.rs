use super::*;

#[test]
fn parses_tagged_events() {
    let json = r#"
{
  "events": [
    { "at_ms": 0, "kind": "scroll", "offset": 0 },
    { "at_ms": 16, "kind": "scroll", "offset": 1250.5 },
    { "at_ms": 40, "kind": "resize", "width": 800, "height": 600 },
    { "at_ms": 400, "kind": "capture", "name": "mid" }
  ]
}
"#;
    let script = ScrollScript::from_reader(json.as_bytes()).unwrap();
    assert_eq!(script.events.len(), 4);
    assert_eq!(script.events[0].action, ScriptAction::Scroll { offset: 0.0 });
    assert_eq!(
        script.events[2].action,
        ScriptAction::Resize {
            width: 800,
            height: 600
        }
    );
    assert_eq!(
        script.events[3],
        ScriptEvent {
            at_ms: 400,
            action: ScriptAction::Capture {
                name: "mid".to_string()
            }
        }
    );
}

#[test]
fn rejects_unordered_events() {
    let json = r#"{ "events": [
        { "at_ms": 10, "kind": "scroll", "offset": 1 },
        { "at_ms": 5, "kind": "scroll", "offset": 2 }
    ] }"#;
    let err = ScrollScript::from_reader(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("ordered"));
}

#[test]
fn rejects_capture_names_with_paths() {
    let json = r#"{ "events": [ { "at_ms": 0, "kind": "capture", "name": "../x" } ] }"#;
    assert!(ScrollScript::from_reader(json.as_bytes()).is_err());
}

#[test]
fn rejects_unknown_kinds_and_bad_json() {
    let json = r#"{ "events": [ { "at_ms": 0, "kind": "zoom" } ] }"#;
    assert!(ScrollScript::from_reader(json.as_bytes()).is_err());
    assert!(ScrollScript::from_reader("{".as_bytes()).is_err());
    assert!(ScrollScript::from_path("target/does/not/exist.json").is_err());
}
