//! Error types projected into [`FieldEvent::Error`] events.
//!
//! All parse problems are non-fatal: the parser describes the condition,
//! emits it as an event, and keeps consuming input. Nothing here crosses the
//! parser boundary as a `Result`.
//!
//! [`FieldEvent::Error`]: crate::FieldEvent::Error

use alloc::string::String;

use thiserror::Error;

/// A parse problem at a known input position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    /// What went wrong.
    pub source: SyntaxError,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

/// The grammar violation taxonomy: unexpected characters, unterminated
/// structures at finalize, and mismatched close brackets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character other than `{` or whitespace before the root object.
    #[error("expected object start, found '{0}'")]
    ExpectedObjectStart(char),
    /// A character other than `"`, `}`, `,`, or whitespace where a property
    /// name may begin.
    #[error("expected property name or '}}', found '{0}'")]
    ExpectedPropertyName(char),
    /// A character other than `:` or whitespace after a property name.
    #[error("expected ':', found '{0}'")]
    ExpectedColon(char),
    /// A character other than `,`, `}`, or whitespace after a value.
    #[error("expected ',' or '}}', found '{0}'")]
    ExpectedCommaOrEnd(char),
    /// A close bracket that does not match the innermost open bracket of a
    /// captured structure.
    #[error("mismatched close bracket '{0}'")]
    MismatchedClose(char),
    /// A bare token inside a captured structure that is neither a JSON
    /// literal nor a number.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    /// Input ended while the named construct was still open.
    #[error("unexpected end of input in {0}")]
    UnexpectedEndOfInput(&'static str),
}
