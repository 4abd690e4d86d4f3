//! The incremental field parser state machine.
//!
//! [`FieldParser`] consumes a root JSON object whose text arrives as
//! arbitrary fragments and emits [`FieldEvent`]s as soon as enough input
//! exists to do so safely: property names resolve whole, string values
//! stream in safe runs, primitives buffer until delimited, and nested
//! structures are captured as opaque raw text.
//!
//! # Examples
//!
//! ```rust
//! use fieldstream::{FieldEvent, FieldParser, ParserOptions};
//!
//! let mut parser = FieldParser::new(ParserOptions::default());
//! for event in parser.process(r#"{"name":"streaming","#) {
//!     println!("{event:?}");
//! }
//! for event in parser.process(r#""size":42}"#) {
//!     println!("{event:?}");
//! }
//! assert_eq!(
//!     parser.finalize(),
//!     vec![FieldEvent::Complete { is_valid: true }]
//! );
//! ```
#![allow(clippy::enum_glob_use)]

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::mem;

use crate::{
    buffer::Buffer,
    error::{ParseError, SyntaxError},
    event::{EventSink, FieldEvent},
    nesting::{NestOutcome, NestingTracker},
    options::ParserOptions,
    scanner::{QuotedScan, ScanState, scan_quoted},
};

/// Position in the top-level object grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the root `{` (and again after the root object closes).
    Start,
    /// Inside the object, before a property name or the closing `}`.
    BeforePropertyName,
    /// Inside a quoted property name.
    PropertyName,
    /// Between a property name and its `:`.
    AfterPropertyName,
    /// Between `:` and the first character of the value.
    BeforeValue,
    /// Inside a quoted string value.
    StringValue,
    /// Inside a number/boolean/null literal.
    PrimitiveValue,
    /// Inside a nested object or array, captured as raw text.
    NestedValue,
    /// After a value, before `,` or `}`.
    AfterValue,
}

/// The streaming field parser.
///
/// Feed it text with [`process`] and close it with [`finalize`]; both return
/// the events that became resolvable, in order. Results are identical no
/// matter how the input is split into fragments — escape state, quote parity,
/// and bracket depth all carry across call boundaries.
///
/// [`process`]: FieldParser::process
/// [`finalize`]: FieldParser::finalize
#[derive(Debug)]
pub struct FieldParser {
    /// Unconsumed input.
    source: Buffer,
    state: ParseState,

    /// The most recently resolved (or in-progress) property name.
    property: String,
    /// Escape/quote carry-over for string-like states.
    scan: ScanState,
    /// Depth tracking, meaningful only in `NestedValue`.
    nesting: NestingTracker,
    /// Accumulator for a primitive or a captured structure's raw text.
    pending: String,

    pos: usize,
    line: usize,
    column: usize,

    options: ParserOptions,
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl FieldParser {
    /// Creates a new parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            source: Buffer::new(),
            state: ParseState::Start,
            property: String::new(),
            scan: ScanState::default(),
            nesting: NestingTracker::new(),
            pending: String::new(),
            pos: 0,
            line: 1,
            column: 1,
            options,
        }
    }

    /// Appends `fragment` and returns every event that became resolvable as a
    /// result, in order.
    ///
    /// Fragments may be any size, from single characters to multi-kilobyte
    /// blocks; cumulative results are identical regardless of splitting.
    pub fn process(&mut self, fragment: &str) -> Vec<FieldEvent> {
        let mut events = Vec::new();
        self.process_with(fragment, &mut events);
        events
    }

    /// [`process`], but appending events to a caller-supplied sink.
    ///
    /// [`process`]: FieldParser::process
    pub fn process_with<S: EventSink>(&mut self, fragment: &str, sink: &mut S) {
        self.source.push(fragment);
        self.run(sink);
    }

    /// Closes the parser, flushing any in-progress string or primitive value
    /// best-effort and appending exactly one [`FieldEvent::Complete`] whose
    /// validity flag is true iff the root object closed cleanly.
    ///
    /// Consumes the parser; further input is statically impossible.
    #[must_use]
    pub fn finalize(self) -> Vec<FieldEvent> {
        let mut events = Vec::new();
        self.finalize_with(&mut events);
        events
    }

    /// [`finalize`], but appending events to a caller-supplied sink.
    ///
    /// [`finalize`]: FieldParser::finalize
    pub fn finalize_with<S: EventSink>(mut self, sink: &mut S) {
        self.run(sink);

        use ParseState::*;
        match self.state {
            Start => {}
            PropertyName => self.emit_error(sink, SyntaxError::UnexpectedEndOfInput("property name")),
            StringValue => {
                // The string never closed; everything safe was already
                // released, so the final chunk is empty.
                sink.accept(FieldEvent::StringChunk {
                    property: self.property.clone(),
                    text: String::new(),
                    is_final: true,
                });
                self.emit_error(sink, SyntaxError::UnexpectedEndOfInput("string value"));
            }
            PrimitiveValue => {
                let raw = mem::take(&mut self.pending);
                sink.accept(FieldEvent::Primitive {
                    property: self.property.clone(),
                    raw,
                });
                self.emit_error(sink, SyntaxError::UnexpectedEndOfInput("object"));
            }
            NestedValue => self.emit_error(sink, SyntaxError::UnexpectedEndOfInput("nested value")),
            BeforePropertyName | AfterPropertyName | BeforeValue | AfterValue => {
                self.emit_error(sink, SyntaxError::UnexpectedEndOfInput("object"));
            }
        }

        sink.accept(FieldEvent::Complete {
            is_valid: self.state == ParseState::Start,
        });
    }

    // --------------------------------------------------------------------
    // Drive loop
    // --------------------------------------------------------------------

    /// Consumes as much of the buffer as can be unambiguously classified
    /// under the current state, emitting events along the way.
    fn run<S: EventSink>(&mut self, sink: &mut S) {
        loop {
            if self.state == ParseState::StringValue {
                if self.string_run(sink) {
                    continue;
                }
                break;
            }

            let Some(ch) = self.source.peek() else { break };
            self.step(ch, sink);
        }
    }

    /// Bulk string scan. Returns true when the closing quote was consumed
    /// (state advanced), false when the buffer was exhausted.
    fn string_run<S: EventSink>(&mut self, sink: &mut S) -> bool {
        match scan_quoted(self.source.chars(), self.scan.escaped) {
            QuotedScan::Terminated { safe } => {
                let mut text = String::new();
                self.take_chars(&mut text, safe);
                let quote = self.advance();
                debug_assert_eq!(quote, Some('"'));
                self.scan = ScanState::default();
                sink.accept(FieldEvent::StringChunk {
                    property: self.property.clone(),
                    text,
                    is_final: true,
                });
                self.state = ParseState::AfterValue;
                true
            }
            QuotedScan::Exhausted { escaped } => {
                // Everything in the buffer is certainly not the terminator;
                // release it now and carry only the escape flag forward.
                let mut text = String::new();
                while let Some(c) = self.source.pop() {
                    self.bump(c);
                    text.push(c);
                }
                self.scan.escaped = escaped;
                self.scan.in_string = true;
                if !text.is_empty() {
                    sink.accept(FieldEvent::StringChunk {
                        property: self.property.clone(),
                        text,
                        is_final: false,
                    });
                }
                false
            }
        }
    }

    /// One transition of the state machine for the buffered char `ch`.
    #[allow(clippy::too_many_lines)]
    fn step<S: EventSink>(&mut self, ch: char, sink: &mut S) {
        use ParseState::*;

        match self.state {
            Start => match ch {
                '{' => {
                    self.advance();
                    self.state = BeforePropertyName;
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.emit_error(sink, SyntaxError::ExpectedObjectStart(c));
                    self.advance();
                }
            },

            BeforePropertyName => match ch {
                '"' => {
                    self.advance();
                    self.property.clear();
                    self.scan = ScanState::default();
                    self.state = PropertyName;
                }
                '}' => {
                    self.advance();
                    self.state = Start;
                }
                ',' => {
                    self.advance();
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.emit_error(sink, SyntaxError::ExpectedPropertyName(c));
                    self.advance();
                }
            },

            PropertyName => {
                self.advance();
                if self.scan.escaped {
                    self.scan.escaped = false;
                    self.property.push(ch);
                } else if ch == '\\' {
                    self.scan.escaped = true;
                } else if ch == '"' {
                    self.state = AfterPropertyName;
                } else {
                    self.property.push(ch);
                }
            }

            AfterPropertyName => match ch {
                ':' => {
                    self.advance();
                    self.state = BeforeValue;
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.emit_error(sink, SyntaxError::ExpectedColon(c));
                    self.advance();
                }
            },

            BeforeValue => match ch {
                '"' => {
                    self.advance();
                    self.scan = ScanState {
                        escaped: false,
                        in_string: true,
                    };
                    self.state = StringValue;
                }
                '{' | '[' => {
                    self.advance();
                    self.nesting.begin(ch);
                    self.pending.clear();
                    self.pending.push(ch);
                    self.state = NestedValue;
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.advance();
                    self.pending.clear();
                    self.pending.push(c);
                    self.state = PrimitiveValue;
                }
            },

            PrimitiveValue => match ch {
                ',' => {
                    self.advance();
                    self.emit_primitive(sink);
                    self.state = BeforePropertyName;
                }
                // The `}` also closes the object: leave it in the buffer and
                // let `AfterValue` consume it exactly once.
                '}' => {
                    self.emit_primitive(sink);
                    self.state = AfterValue;
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.advance();
                    self.pending.push(c);
                    // Fast path: pull the rest of the literal in one run.
                    let allow_unicode = self.options.allow_unicode_whitespace;
                    let run = self.source.take_run(&mut self.pending, |d| {
                        !matches!(d, ',' | '}')
                            && !matches!(d, ' ' | '\t' | '\n' | '\r')
                            && !(allow_unicode && d.is_whitespace())
                    });
                    self.column += run;
                    self.pos += run;
                }
            },

            NestedValue => {
                let (line, column) = (self.line, self.column);
                self.advance();
                self.pending.push(ch);
                let step = self.nesting.step(ch);
                if let Some(token) = step.stray_token {
                    self.emit_error_at(sink, SyntaxError::UnexpectedToken(token), line, column);
                }
                match step.outcome {
                    NestOutcome::Continue => {}
                    NestOutcome::MismatchedClose(c) => {
                        self.emit_error_at(sink, SyntaxError::MismatchedClose(c), line, column);
                    }
                    NestOutcome::Closed => {
                        let raw = mem::take(&mut self.pending);
                        sink.accept(FieldEvent::Complex {
                            property: self.property.clone(),
                            raw,
                            is_object: self.nesting.root_is_object(),
                        });
                        self.state = AfterValue;
                    }
                }
            }

            AfterValue => match ch {
                ',' => {
                    self.advance();
                    self.state = BeforePropertyName;
                }
                '}' => {
                    self.advance();
                    self.state = Start;
                }
                c if self.is_whitespace(c) => {
                    self.advance();
                }
                c => {
                    self.emit_error(sink, SyntaxError::ExpectedCommaOrEnd(c));
                    self.advance();
                }
            },

            StringValue => unreachable!("string runs are handled in bulk"),
        }
    }

    // --------------------------------------------------------------------
    // Buffer bookkeeping
    // --------------------------------------------------------------------

    fn advance(&mut self) -> Option<char> {
        let ch = self.source.pop()?;
        self.bump(ch);
        Some(ch)
    }

    fn take_chars(&mut self, dst: &mut String, n: usize) {
        for _ in 0..n {
            if let Some(ch) = self.source.pop() {
                self.bump(ch);
                dst.push(ch);
            }
        }
    }

    #[inline]
    fn bump(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn is_whitespace(&self, ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r')
            || (self.options.allow_unicode_whitespace && ch.is_whitespace())
    }

    // --------------------------------------------------------------------
    // Emission
    // --------------------------------------------------------------------

    fn emit_primitive<S: EventSink>(&mut self, sink: &mut S) {
        let raw = mem::take(&mut self.pending);
        sink.accept(FieldEvent::Primitive {
            property: self.property.clone(),
            raw,
        });
    }

    fn emit_error<S: EventSink>(&self, sink: &mut S, source: SyntaxError) {
        self.emit_error_at(sink, source, self.line, self.column);
    }

    fn emit_error_at<S: EventSink>(
        &self,
        sink: &mut S,
        source: SyntaxError,
        line: usize,
        column: usize,
    ) {
        let err = ParseError {
            source,
            line,
            column,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        sink.accept(FieldEvent::Error {
            message: err.to_string(),
        });
    }
}
