use alloc::{vec, vec::Vec};

use super::utils::{parse_all, strict};
use crate::{FieldEvent, FieldParser};

#[test]
fn events_round_trip_through_serde() {
    let mut parser = FieldParser::new(strict());
    let mut events = parser.process(r#"{"s":"par"#);
    events.extend(parser.process(r#"tial","n":42,"o":[1,2]}"#));
    events.extend(parser.finalize());

    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<FieldEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}

#[test]
fn tagged_layout_per_variant() {
    let events = parse_all(r#"{"a":"x","n":null,"o":{}}"#);
    let json = serde_json::to_value(&events).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "StringChunk", "property": "a", "text": "x", "is_final": true },
            { "kind": "Primitive", "property": "n", "raw": "null" },
            { "kind": "Complex", "property": "o", "raw": "{}", "is_object": true },
            { "kind": "Complete", "is_valid": true },
        ])
    );
}

#[test]
fn error_event_deserializes_from_tagged_json() {
    let back: Vec<FieldEvent> =
        serde_json::from_str(r#"[{"kind":"Error","message":"boom at 1:1"}]"#).unwrap();
    assert_eq!(
        back,
        vec![FieldEvent::Error {
            message: "boom at 1:1".into()
        }]
    );
}
