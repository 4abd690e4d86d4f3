//! Depth tracking for opaque capture of nested objects and arrays.
//!
//! While the parser sits inside a nested structure it does not parse the
//! structure's grammar; it only needs to know when the matching close bracket
//! arrives, without being confused by brackets inside nested strings. The
//! tracker keeps an explicit stack of open-bracket kinds plus the string scan
//! state, and reports bare tokens that can never occur in well-formed JSON so
//! the caller can surface a diagnostic without aborting the capture.

use alloc::{string::String, vec::Vec};

use crate::scanner::{ScanState, Scanned};

/// Kind of an open bracket on the nesting stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenBracket {
    /// `{`
    Object,
    /// `[`
    Array,
}

impl OpenBracket {
    fn closes(self, ch: char) -> bool {
        match self {
            OpenBracket::Object => ch == '}',
            OpenBracket::Array => ch == ']',
        }
    }
}

/// Structural outcome of feeding one character to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NestOutcome {
    /// Still inside the structure.
    Continue,
    /// The pop emptied the stack: the structure is fully captured.
    Closed,
    /// A close bracket that does not match the top of the stack. Tolerated:
    /// the stack is left untouched and capture continues.
    MismatchedClose(char),
}

/// One tracker step: the structural outcome plus an optional bare token that
/// this character completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NestStep {
    pub outcome: NestOutcome,
    /// A run of token characters outside any string that is neither a JSON
    /// literal nor number-shaped, e.g. the `bad` in `{bad}`.
    pub stray_token: Option<String>,
}

impl NestStep {
    fn cont() -> Self {
        Self {
            outcome: NestOutcome::Continue,
            stray_token: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct NestingTracker {
    stack: Vec<OpenBracket>,
    scan: ScanState,
    /// Accumulates the current bare token run outside strings.
    token: String,
    root: OpenBracket,
}

impl NestingTracker {
    pub(crate) fn new() -> Self {
        Self {
            stack: Vec::new(),
            scan: ScanState::default(),
            token: String::new(),
            root: OpenBracket::Object,
        }
    }

    /// Resets all state and opens the structure with its first bracket.
    /// `open` must be `{` or `[`.
    pub(crate) fn begin(&mut self, open: char) {
        debug_assert!(matches!(open, '{' | '['));
        self.stack.clear();
        self.scan = ScanState::default();
        self.token.clear();
        self.root = if open == '{' {
            OpenBracket::Object
        } else {
            OpenBracket::Array
        };
        self.stack.push(self.root);
    }

    /// Whether the structure being captured is an object (vs. an array).
    pub(crate) fn root_is_object(&self) -> bool {
        self.root == OpenBracket::Object
    }

    /// Advances the tracker by one character. The caller appends the raw
    /// character to its capture unconditionally; this only decides structure.
    pub(crate) fn step(&mut self, ch: char) -> NestStep {
        if self.scan.in_string {
            self.scan.step(ch);
            return NestStep::cont();
        }

        if is_token_char(ch) {
            self.token.push(ch);
            return NestStep::cont();
        }
        let stray_token = self.flush_token();

        if self.scan.step(ch) == Scanned::Quote {
            return NestStep {
                outcome: NestOutcome::Continue,
                stray_token,
            };
        }

        let outcome = match ch {
            '{' => {
                self.stack.push(OpenBracket::Object);
                NestOutcome::Continue
            }
            '[' => {
                self.stack.push(OpenBracket::Array);
                NestOutcome::Continue
            }
            '}' | ']' => match self.stack.last() {
                Some(top) if top.closes(ch) => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        NestOutcome::Closed
                    } else {
                        NestOutcome::Continue
                    }
                }
                _ => NestOutcome::MismatchedClose(ch),
            },
            _ => NestOutcome::Continue,
        };

        NestStep {
            outcome,
            stray_token,
        }
    }

    fn flush_token(&mut self) -> Option<String> {
        if self.token.is_empty() {
            return None;
        }
        let run = core::mem::take(&mut self.token);
        if matches!(run.as_str(), "true" | "false" | "null") {
            return None;
        }
        // Number-shaped runs ("42", "-1.5e+3") are not worth a diagnostic;
        // structural boundaries are all this tracker guarantees.
        if run.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
            return None;
        }
        Some(run)
    }
}

/// Characters that may form a bare primitive token between structural
/// delimiters: literal letters, digits, and number punctuation.
fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-')
}

#[cfg(test)]
mod tests {
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    use super::{NestOutcome, NestingTracker};

    fn drive(tracker: &mut NestingTracker, text: &str) -> (Option<usize>, Vec<String>) {
        let mut strays = Vec::new();
        for (i, ch) in text.chars().enumerate() {
            let step = tracker.step(ch);
            if let Some(tok) = step.stray_token {
                strays.push(tok);
            }
            if step.outcome == NestOutcome::Closed {
                return (Some(i), strays);
            }
        }
        (None, strays)
    }

    #[test]
    fn closes_at_matching_depth() {
        let mut t = NestingTracker::new();
        t.begin('{');
        let (closed, strays) = drive(&mut t, r#""a":{"b":[1,2]}}"#);
        assert_eq!(closed, Some(15));
        assert!(strays.is_empty());
    }

    #[test]
    fn brackets_inside_strings_are_inert() {
        let mut t = NestingTracker::new();
        t.begin('[');
        let (closed, _) = drive(&mut t, r#""}]","[\"":"x"]"#);
        assert_eq!(closed, Some(14));
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let mut t = NestingTracker::new();
        t.begin('{');
        let (closed, _) = drive(&mut t, r#""k":"a\"}b"}"#);
        assert_eq!(closed, Some(11));
    }

    #[test]
    fn mismatched_close_is_tolerated() {
        let mut t = NestingTracker::new();
        t.begin('{');
        // `]` cannot close an object frame; the stack must survive it.
        let mut saw_mismatch = false;
        let mut closed_at = None;
        for (i, ch) in r#""a":1]}"#.chars().enumerate() {
            let step = t.step(ch);
            match step.outcome {
                NestOutcome::MismatchedClose(']') => saw_mismatch = true,
                NestOutcome::Closed => closed_at = Some(i),
                _ => {}
            }
        }
        assert!(saw_mismatch);
        assert_eq!(closed_at, Some(6));
    }

    #[test]
    fn bare_word_is_reported_once() {
        let mut t = NestingTracker::new();
        t.begin('{');
        let (closed, strays) = drive(&mut t, "bad}");
        assert_eq!(closed, Some(3));
        assert_eq!(strays, ["bad".to_string()]);
    }

    #[test]
    fn literals_and_numbers_are_not_stray() {
        let mut t = NestingTracker::new();
        t.begin('[');
        let (closed, strays) = drive(&mut t, "true,false,null,-1.5e+3,42]");
        assert_eq!(closed, Some(26));
        assert!(strays.is_empty());
    }

    #[test]
    fn root_kind_tracks_opening_bracket() {
        let mut t = NestingTracker::new();
        t.begin('{');
        assert!(t.root_is_object());
        t.begin('[');
        assert!(!t.root_is_object());
    }
}
