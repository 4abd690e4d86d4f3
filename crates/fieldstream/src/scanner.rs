//! Escape/quote carry-over state and the buffered string boundary search.
//!
//! A fragment boundary can fall anywhere, including between a backslash and
//! the character it escapes. The state that must survive such a boundary is
//! deliberately tiny and explicit: [`ScanState`] is threaded into and out of
//! every scan instead of living as ambient booleans on the parser, so the
//! carry-over contract can be tested in isolation.

/// Scan position within string-like input.
///
/// `escaped` is true only directly after an unconsumed backslash; `in_string`
/// is meaningful while walking a captured nested structure, where quotes
/// toggle it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub escaped: bool,
    pub in_string: bool,
}

/// Classification of one character under the current [`ScanState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scanned {
    /// Plain content (including the payload of an escape sequence).
    Content,
    /// A backslash that opens an escape sequence.
    Escape,
    /// An unescaped quote: a string just opened or closed.
    Quote,
}

impl ScanState {
    /// Advances the state by one character. This is the single authority for
    /// escape and quote transitions; both the string scanner and the nesting
    /// tracker defer to it.
    pub(crate) fn step(&mut self, ch: char) -> Scanned {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
                Scanned::Content
            } else if ch == '\\' {
                self.escaped = true;
                Scanned::Escape
            } else if ch == '"' {
                self.in_string = false;
                Scanned::Quote
            } else {
                Scanned::Content
            }
        } else if ch == '"' {
            self.in_string = true;
            Scanned::Quote
        } else {
            Scanned::Content
        }
    }
}

/// Result of searching the unconsumed buffer for a closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuotedScan {
    /// An unescaped `"` terminates the string after `safe` characters of
    /// content. The quote itself is not counted.
    Terminated {
        /// Number of content characters before the closing quote.
        safe: usize,
    },
    /// No terminator in the buffer: every character is releasable content.
    /// If the buffer ended in an unresolved escape, `escaped` carries that
    /// fact to the next fragment so a quote right after the boundary is
    /// treated as literal.
    Exhausted {
        /// Escape flag to seed the next scan with.
        escaped: bool,
    },
}

/// Searches `chars` for the first unescaped `"`, seeding the walk with an
/// escape flag carried over from the previous fragment.
///
/// Characters before the terminator are certainly not closing quotes and are
/// safe to release immediately, escape sequences preserved as-is.
pub(crate) fn scan_quoted<I>(chars: I, escaped: bool) -> QuotedScan
where
    I: IntoIterator<Item = char>,
{
    let mut state = ScanState {
        escaped,
        in_string: true,
    };
    let mut safe = 0;
    for ch in chars {
        if state.step(ch) == Scanned::Quote {
            return QuotedScan::Terminated { safe };
        }
        safe += 1;
    }
    QuotedScan::Exhausted {
        escaped: state.escaped,
    }
}
