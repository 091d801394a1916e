// ============================================================================
// Token Cursor
// Line-buffered, whitespace-tokenizing cursor over a BufRead
// ============================================================================

use super::errors::{InputError, InputResult};
use std::io::{self, BufRead, Read};
use std::ops::Range;
use std::str::FromStr;

/// Single cursor over an input stream.
///
/// Holds at most one physical line. Token reads advance within that line
/// and pull the next line only when the remainder is whitespace; line reads
/// take whatever is left of the current line, or the next one if nothing is.
pub(crate) struct TokenCursor<R> {
    input: R,
    line: String,
    pos: usize,
    max_line_length: Option<usize>,
    strip_carriage_return: bool,
}

impl<R: BufRead> TokenCursor<R> {
    pub(crate) fn new(input: R, max_line_length: Option<usize>, strip_carriage_return: bool) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
            max_line_length,
            strip_carriage_return,
        }
    }

    /// Parse the next whitespace-delimited token as `T`.
    ///
    /// Whitespace before the token (line terminators included) is consumed.
    /// The token itself is consumed only if it parses.
    pub(crate) fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> InputResult<T> {
        let span = self.peek_token()?;
        let token = &self.line[span.clone()];

        match token.parse::<T>() {
            Ok(value) => {
                tracing::trace!(token, expected, "token parsed");
                self.pos = span.end;
                Ok(value)
            },
            Err(_) => {
                tracing::debug!(token, expected, "token does not parse");
                Err(InputError::FormatMismatch {
                    token: token.to_string(),
                    expected,
                })
            },
        }
    }

    /// Discard the rest of the current line, terminator included.
    ///
    /// With nothing left of the current line, the whole next line is
    /// discarded instead.
    pub(crate) fn skip_line(&mut self) -> InputResult<()> {
        if self.pos >= self.line.len() && !self.fill_line()? {
            return Err(InputError::EndOfInput);
        }
        self.pos = self.line.len();
        Ok(())
    }

    /// Take the rest of the current line (or the next line) without its
    /// terminator.
    pub(crate) fn next_line(&mut self) -> InputResult<String> {
        if self.pos >= self.line.len() && !self.fill_line()? {
            return Err(InputError::EndOfInput);
        }

        let mut line = self.line[self.pos..].to_string();
        self.pos = self.line.len();

        if line.ends_with('\n') {
            line.pop();
            if self.strip_carriage_return && line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Release the stream. Any buffered remainder of the current line is lost.
    pub(crate) fn into_inner(self) -> R {
        self.input
    }

    /// Position on the next token and return its byte range in `line`.
    fn peek_token(&mut self) -> InputResult<Range<usize>> {
        loop {
            if let Some(offset) = self.line[self.pos..].find(|c: char| !c.is_whitespace()) {
                let start = self.pos + offset;
                self.pos = start;
                let len = self.line[start..]
                    .find(char::is_whitespace)
                    .unwrap_or(self.line.len() - start);
                return Ok(start..start + len);
            }

            if !self.fill_line()? {
                return Err(InputError::EndOfInput);
            }
        }
    }

    /// Replace the buffer with the next physical line.
    ///
    /// Returns `Ok(false)` at end of input.
    fn fill_line(&mut self) -> InputResult<bool> {
        self.line.clear();
        self.pos = 0;

        let mut bytes = Vec::new();
        let read = match self.max_line_length {
            None => self.input.read_until(b'\n', &mut bytes)?,
            Some(limit) => {
                let read = (&mut self.input)
                    .take(limit as u64 + 1)
                    .read_until(b'\n', &mut bytes)?;
                if read > limit && bytes.last() != Some(&b'\n') {
                    self.skip_physical_line()?;
                    tracing::debug!(limit, "input line exceeds limit");
                    return Err(InputError::LineTooLong { limit });
                }
                read
            },
        };

        if read == 0 {
            tracing::trace!("end of input");
            return Ok(false);
        }

        self.line = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(true)
    }

    /// Drop bytes up to and including the next `\n` without buffering them.
    fn skip_physical_line(&mut self) -> io::Result<()> {
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    self.input.consume(i + 1);
                    return Ok(());
                },
                None => {
                    let n = available.len();
                    self.input.consume(n);
                },
            }
        }
    }
}
