// ============================================================================
// Prompted Reader
// Prompt-then-read wrapper over an injected input stream and output sink
// ============================================================================

use super::config::ReaderConfig;
use super::cursor::TokenCursor;
use super::errors::{InputError, InputResult};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts on an output sink and reads typed values from an input stream.
///
/// Every read blocks until enough input is available. Errors are returned
/// to the caller unchanged: nothing is retried or re-prompted.
///
/// # Example
/// ```
/// use quiz_kit::input::PromptedReader;
/// use std::io::Cursor;
///
/// let input = Cursor::new("7\nAda Lovelace\n");
/// let mut reader = PromptedReader::new(input, Vec::new());
///
/// assert_eq!(reader.get_int("Answer: ").unwrap(), 7);
/// assert_eq!(reader.get_string("Name: ").unwrap(), "Ada Lovelace");
///
/// let (_, output) = reader.into_inner();
/// assert_eq!(output, b"Answer: Name: ");
/// ```
pub struct PromptedReader<R, W> {
    /// Cursor over the input stream
    cursor: TokenCursor<R>,

    /// Sink for prompts
    output: W,

    config: ReaderConfig,
}

impl<R: BufRead, W: Write> PromptedReader<R, W> {
    /// Create a reader with the default configuration
    pub fn new(input: R, output: W) -> Self {
        let config = ReaderConfig::default();
        Self {
            cursor: TokenCursor::new(input, config.max_line_length, config.strip_carriage_return),
            output,
            config,
        }
    }

    /// Create a reader with an explicit configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(input: R, output: W, config: ReaderConfig) -> InputResult<Self> {
        config.validate().map_err(InputError::InvalidConfig)?;
        Ok(Self {
            cursor: TokenCursor::new(input, config.max_line_length, config.strip_carriage_return),
            output,
            config,
        })
    }

    /// Prompt, then read the next token as an integer.
    ///
    /// # Errors
    /// - `FormatMismatch` if the token is not an integer (the token stays unread)
    /// - `EndOfInput` if no token remains
    pub fn get_int(&mut self, prompt: &str) -> InputResult<i32> {
        self.prompt(prompt)?;
        self.cursor.next_parsed("integer")
    }

    /// Prompt, then read the next token as a floating-point value.
    ///
    /// # Errors
    /// - `FormatMismatch` if the token is not a number (the token stays unread)
    /// - `EndOfInput` if no token remains
    pub fn get_double(&mut self, prompt: &str) -> InputResult<f64> {
        self.prompt(prompt)?;
        self.cursor.next_parsed("number")
    }

    /// Discard the rest of the current line, prompt, then read a full line.
    ///
    /// The discard step drops the terminator a previous `get_int` or
    /// `get_double` left behind. On a reader that has not consumed anything
    /// yet it drops the whole first line. Two calls in a row therefore
    /// skip a line: after the first call the cursor sits at the end of the
    /// line it returned, so the second call discards the following line and
    /// returns the one after it. The returned line has no terminator and
    /// may be empty.
    ///
    /// # Errors
    /// `EndOfInput` if there is no line to discard or no line to read.
    pub fn get_string(&mut self, prompt: &str) -> InputResult<String> {
        self.cursor.skip_line()?;
        self.prompt(prompt)?;
        self.cursor.next_line()
    }

    /// Discard the rest of the current line without prompting.
    ///
    /// Clears a token left unread by a `FormatMismatch`.
    ///
    /// # Errors
    /// `EndOfInput` if there is no line to discard.
    pub fn discard_line(&mut self) -> InputResult<()> {
        self.cursor.skip_line()
    }

    /// Get the reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Release the input and output handles.
    ///
    /// Any unread remainder of the current line is discarded.
    pub fn into_inner(self) -> (R, W) {
        (self.cursor.into_inner(), self.output)
    }

    fn prompt(&mut self, prompt: &str) -> InputResult<()> {
        tracing::debug!(prompt, "prompting");
        self.output.write_all(prompt.as_bytes())?;
        if self.config.flush_prompt {
            self.output.flush()?;
        }
        Ok(())
    }
}

impl PromptedReader<StdinLock<'static>, Stdout> {
    /// Reader bound to the process's standard input and output.
    ///
    /// Holds the stdin lock for the reader's lifetime.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> PromptedReader<Cursor<Vec<u8>>, Vec<u8>> {
        PromptedReader::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    fn written(reader: PromptedReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, output) = reader.into_inner();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_get_int() {
        let mut r = reader("42\n");
        assert_eq!(r.get_int("n? ").unwrap(), 42);
        assert_eq!(written(r), "n? ");
    }

    #[test]
    fn test_get_int_negative_and_signed() {
        let mut r = reader("-8 +9\n");
        assert_eq!(r.get_int("").unwrap(), -8);
        assert_eq!(r.get_int("").unwrap(), 9);
    }

    #[test]
    fn test_get_int_format_mismatch() {
        let mut r = reader("abc\n");
        match r.get_int("n? ") {
            Err(InputError::FormatMismatch { token, expected }) => {
                assert_eq!(token, "abc");
                assert_eq!(expected, "integer");
            },
            other => panic!("expected FormatMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_get_int_rejects_decimal_token() {
        let mut r = reader("3.5\n");
        assert!(r.get_int("").unwrap_err().is_format_mismatch());
        // The token is still there for a double read.
        assert_eq!(r.get_double("").unwrap(), 3.5);
    }

    #[test]
    fn test_get_int_out_of_range_is_mismatch() {
        let mut r = reader("99999999999\n");
        assert!(r.get_int("").unwrap_err().is_format_mismatch());
    }

    #[test]
    fn test_get_int_end_of_input() {
        let mut r = reader("   \n\n");
        assert!(r.get_int("n? ").unwrap_err().is_end_of_input());
        // Prompt is written before blocking on input.
        assert_eq!(written(r), "n? ");
    }

    #[test]
    fn test_get_double() {
        let mut r = reader("3.5 -0.25 7\n");
        assert_eq!(r.get_double("x? ").unwrap(), 3.5);
        assert_eq!(r.get_double("x? ").unwrap(), -0.25);
        assert_eq!(r.get_double("x? ").unwrap(), 7.0);
    }

    #[test]
    fn test_get_double_format_mismatch() {
        let mut r = reader("three\n");
        assert!(r.get_double("").unwrap_err().is_format_mismatch());
    }

    #[test]
    fn test_get_string_after_get_int() {
        let mut r = reader("42\nhello world\n");
        assert_eq!(r.get_int("n? ").unwrap(), 42);
        assert_eq!(r.get_string("s? ").unwrap(), "hello world");
        assert_eq!(written(r), "n? s? ");
    }

    #[test]
    fn test_get_string_blank_line() {
        let mut r = reader("42\n\n");
        assert_eq!(r.get_int("").unwrap(), 42);
        assert_eq!(r.get_string("").unwrap(), "");
    }

    #[test]
    fn test_consecutive_get_string_skips_a_line() {
        let mut r = reader("42\n\nskipped\nlast\n");
        assert_eq!(r.get_int("").unwrap(), 42);
        assert_eq!(r.get_string("").unwrap(), "");
        // The second call discards "skipped" before reading.
        assert_eq!(r.get_string("").unwrap(), "last");
        assert!(r.get_string("").unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_get_string_discards_trailing_tokens() {
        let mut r = reader("1 2 3\nkept\n");
        assert_eq!(r.get_int("").unwrap(), 1);
        assert_eq!(r.get_string("").unwrap(), "kept");
    }

    #[test]
    fn test_get_string_skips_first_line_on_fresh_reader() {
        let mut r = reader("dropped\nkept\n");
        assert_eq!(r.get_string("").unwrap(), "kept");
    }

    #[test]
    fn test_get_string_end_of_input() {
        let mut r = reader("42\n");
        assert_eq!(r.get_int("").unwrap(), 42);
        assert!(r.get_string("s? ").unwrap_err().is_end_of_input());
    }

    #[test]
    fn test_get_string_prompt_follows_discard() {
        // Nothing to discard: no prompt is written.
        let mut r = reader("");
        assert!(r.get_string("s? ").unwrap_err().is_end_of_input());
        assert_eq!(written(r), "");
    }

    #[test]
    fn test_get_string_discards_mismatched_line() {
        let mut r = reader("oops\n\n12\n");
        assert!(r.get_int("").unwrap_err().is_format_mismatch());
        assert_eq!(r.get_string("").unwrap(), "");
        assert_eq!(r.get_int("").unwrap(), 12);
    }

    #[test]
    fn test_discard_line_clears_bad_token() {
        let mut r = reader("x 1\n2\n");
        assert!(r.get_int("").unwrap_err().is_format_mismatch());
        r.discard_line().unwrap();
        assert_eq!(r.get_int("").unwrap(), 2);
        assert_eq!(written(r), "");
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = PromptedReader::with_config(
            Cursor::new(Vec::new()),
            Vec::new(),
            ReaderConfig::new().with_max_line_length(0),
        );
        assert!(matches!(result, Err(InputError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_config_line_limit() {
        let mut r = PromptedReader::with_config(
            Cursor::new(b"123456789\n5\n".to_vec()),
            Vec::new(),
            ReaderConfig::new().with_max_line_length(4),
        )
        .unwrap();
        assert!(matches!(
            r.get_int(""),
            Err(InputError::LineTooLong { limit: 4 })
        ));
        assert_eq!(r.get_int("").unwrap(), 5);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompt_write_failure() {
        let mut r = PromptedReader::new(Cursor::new(b"1\n".to_vec()), FailingSink);
        assert!(matches!(r.get_int("n? "), Err(InputError::Io(_))));
    }
}
