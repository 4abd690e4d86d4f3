//! Incremental parsing of a JSON object arriving as arbitrary text fragments.
//!
//! `fieldstream` consumes the serialized bytes of a single top-level JSON
//! object — split however the transport happens to split them, including
//! mid-escape, mid-string, or mid-nested-structure — and emits events
//! describing the object's top-level fields as soon as enough data exists to
//! do so safely, without ever buffering the full document.
//!
//! String values stream out in safe runs so consumers can start processing
//! before the value is complete; primitives (numbers, booleans, null) arrive
//! whole as raw text; nested objects and arrays are captured opaquely and
//! handed over as exact, re-parseable raw text once their matching close
//! bracket is found.
//!
//! # Examples
//!
//! ```rust
//! use fieldstream::{FieldEvent, FieldParser, ParserOptions};
//!
//! let mut parser = FieldParser::new(ParserOptions::default());
//! let mut events = parser.process(r#"{"tag":"ab"#);
//! events.extend(parser.process(r#"c","count":7}"#));
//! events.extend(parser.finalize());
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         FieldEvent::StringChunk {
//!             property: "tag".to_string(),
//!             text: "ab".to_string(),
//!             is_final: false,
//!         },
//!         FieldEvent::StringChunk {
//!             property: "tag".to_string(),
//!             text: "c".to_string(),
//!             is_final: true,
//!         },
//!         FieldEvent::Primitive {
//!             property: "count".to_string(),
//!             raw: "7".to_string(),
//!         },
//!         FieldEvent::Complete { is_valid: true },
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod event;
mod nesting;
mod options;
mod parser;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SyntaxError};
pub use event::{EventSink, FieldEvent};
pub use options::ParserOptions;
pub use parser::FieldParser;
