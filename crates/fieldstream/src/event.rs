//! Events emitted by the streaming field parser, and the sink they flow into.
//!
//! [`FieldEvent`] enumerates everything the parser can observe about the root
//! object's fields: streamed string chunks, whole primitive values, opaque
//! nested structures, recoverable errors, and the final completion marker.
//!
//! # Examples
//!
//! ```
//! use fieldstream::{FieldEvent, FieldParser, ParserOptions};
//!
//! let mut parser = FieldParser::new(ParserOptions::default());
//! let events = parser.process(r#"{"n":42}"#);
//! assert_eq!(
//!     events,
//!     vec![FieldEvent::Primitive {
//!         property: "n".to_string(),
//!         raw: "42".to_string(),
//!     }]
//! );
//! let events = parser.finalize();
//! assert_eq!(events, vec![FieldEvent::Complete { is_valid: true }]);
//! ```
use alloc::{string::String, vec::Vec};

// Helper used solely by serde `skip_serializing_if` to omit `is_final` when it
// is `false`.
#[doc(hidden)]
#[cfg(any(test, feature = "serde"))]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// An observation about the root object, emitted as soon as it is safe to do
/// so.
///
/// A string-valued property produces zero or more non-final [`StringChunk`]s
/// followed by exactly one final (possibly empty) chunk. [`Primitive`] and
/// [`Complex`] are each emitted exactly once per property. [`Error`] may
/// appear any number of times and never halts processing. [`Complete`] is
/// emitted exactly once, by `finalize`.
///
/// [`StringChunk`]: FieldEvent::StringChunk
/// [`Primitive`]: FieldEvent::Primitive
/// [`Complex`]: FieldEvent::Complex
/// [`Error`]: FieldEvent::Error
/// [`Complete`]: FieldEvent::Complete
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// A run of string-value content that can no longer be affected by
    /// characters that have not arrived yet.
    ///
    /// `text` is raw: escape sequences are carried through undecoded, so the
    /// concatenation of all chunks for a property is byte-identical to the
    /// string's source between its quotes.
    StringChunk {
        /// The property this chunk belongs to.
        property: String,
        /// The raw content run, possibly empty on the final chunk.
        text: String,
        /// Whether the string's closing quote has been seen.
        #[cfg_attr(
            any(test, feature = "serde"),
            serde(default, skip_serializing_if = "crate::event::is_false")
        )]
        is_final: bool,
    },
    /// A number, boolean, or null value, carried as raw text.
    Primitive {
        /// The property the value belongs to.
        property: String,
        /// The value exactly as it appeared in the input.
        raw: String,
    },
    /// A nested object or array, captured as exact, re-parseable raw text.
    Complex {
        /// The property the value belongs to.
        property: String,
        /// The value's source span, byte-identical to the input including
        /// interior whitespace and escaping.
        raw: String,
        /// True for `{…}`, false for `[…]`.
        is_object: bool,
    },
    /// A recoverable parse problem. The parser resynchronizes at the next
    /// structural token and keeps going.
    Error {
        /// Human-readable description, including the input position.
        message: String,
    },
    /// End of parsing, emitted exactly once by `finalize`.
    Complete {
        /// True iff the root object closed cleanly (the machine ended back
        /// at its start state).
        is_valid: bool,
    },
}

/// Ordered, append-only destination for parser events.
///
/// The parser never depends on a delivery mechanism; anything with an ordered
/// append — a plain `Vec`, a bounded queue adapter, a callback wrapper — can
/// receive the stream.
pub trait EventSink {
    /// Appends one event. Events arrive in the exact order their underlying
    /// input was resolved.
    fn accept(&mut self, event: FieldEvent);
}

impl EventSink for Vec<FieldEvent> {
    fn accept(&mut self, event: FieldEvent) {
        self.push(event);
    }
}
