use alloc::{string::String, vec::Vec};

use crate::{FieldEvent, FieldParser, ParserOptions};

/// Options that panic on the first `Error` event, for tests that expect a
/// clean parse.
pub fn strict() -> ParserOptions {
    ParserOptions {
        panic_on_error: true,
        ..ParserOptions::default()
    }
}

/// Feeds `fragments` in order, then finalizes, returning every event.
pub fn parse_fragments_with(options: ParserOptions, fragments: &[&str]) -> Vec<FieldEvent> {
    let mut parser = FieldParser::new(options);
    let mut events = Vec::new();
    for fragment in fragments {
        parser.process_with(fragment, &mut events);
    }
    parser.finalize_with(&mut events);
    events
}

pub fn parse_fragments(fragments: &[&str]) -> Vec<FieldEvent> {
    parse_fragments_with(ParserOptions::default(), fragments)
}

/// Feeds the whole document as one fragment, then finalizes.
pub fn parse_all(text: &str) -> Vec<FieldEvent> {
    parse_fragments(&[text])
}

/// Merges adjacent string chunks of the same property so event sequences can
/// be compared across different fragmentations.
pub fn coalesce(events: &[FieldEvent]) -> Vec<FieldEvent> {
    let mut out: Vec<FieldEvent> = Vec::new();
    for event in events {
        if let FieldEvent::StringChunk {
            property,
            text,
            is_final,
        } = event
        {
            if let Some(FieldEvent::StringChunk {
                property: prev_property,
                text: prev_text,
                is_final: prev_final,
            }) = out.last_mut()
            {
                if prev_property == property && !*prev_final {
                    prev_text.push_str(text);
                    *prev_final = *is_final;
                    continue;
                }
            }
        }
        out.push(event.clone());
    }
    out
}

/// Shorthand constructors keeping expected-event lists readable.
pub fn chunk(property: &str, text: &str, is_final: bool) -> FieldEvent {
    FieldEvent::StringChunk {
        property: String::from(property),
        text: String::from(text),
        is_final,
    }
}

pub fn primitive(property: &str, raw: &str) -> FieldEvent {
    FieldEvent::Primitive {
        property: String::from(property),
        raw: String::from(raw),
    }
}

pub fn complex(property: &str, raw: &str, is_object: bool) -> FieldEvent {
    FieldEvent::Complex {
        property: String::from(property),
        raw: String::from(raw),
        is_object,
    }
}

pub fn complete(is_valid: bool) -> FieldEvent {
    FieldEvent::Complete { is_valid }
}
