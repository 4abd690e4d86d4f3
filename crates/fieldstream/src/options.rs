/// Configuration options for the streaming field parser.
///
/// # Default
///
/// All options default to `false`.
///
/// # Examples
///
/// ```rust
/// use fieldstream::{FieldParser, ParserOptions};
///
/// let parser = FieldParser::new(ParserOptions {
///     allow_unicode_whitespace: true,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to allow any Unicode whitespace between structural tokens.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of emitting `Error` events.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    pub panic_on_error: bool,
}
