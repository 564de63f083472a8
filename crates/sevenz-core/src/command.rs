//! Command micro-syntax parsing.
//!
//! A pre-built command string carries a leading sub-command word, zero or
//! more double-quoted path tokens, and optionally one `-o"<path>"` output
//! token. The string is lexed once into a typed result; the output token
//! is never captured as a generic path, and the runner always appends it
//! last.

use crate::error::DriverError;

/// Typed parse result of one command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Leading archiver sub-command, e.g. `a`, `x`, `l`.
    pub sub_command: String,
    /// Double-quoted path tokens in extraction order, quotes removed.
    pub paths: Vec<String>,
    /// Path of the `-o"<path>"` output token, when present.
    pub output: Option<String>,
}

impl CommandLine {
    /// Lex a command string.
    ///
    /// Backslash-escaped characters inside quoted tokens are preserved
    /// verbatim; the escape only prevents a `"` from terminating the
    /// token. Anything outside quotes that is not the output marker is
    /// ignored. When the output token repeats, the first one wins.
    pub fn parse(command: &str) -> Result<Self, DriverError> {
        let bytes = command.as_bytes();
        let mut i = 0;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if start == i {
            return Err(DriverError::EmptyInvocation);
        }
        let sub_command = command[start..i].to_string();

        let mut paths = Vec::new();
        let mut output: Option<String> = None;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    let (token, next) = lex_quoted(command, i)?;
                    paths.push(token);
                    i = next;
                }
                b'-' if bytes[i..].starts_with(b"-o\"") => {
                    let (token, next) = lex_quoted(command, i + 2)?;
                    if output.is_none() {
                        output = Some(token);
                    }
                    i = next;
                }
                _ => i += 1,
            }
        }

        Ok(Self {
            sub_command,
            paths,
            output,
        })
    }
}

/// Lex one double-quoted token starting at the opening quote.
///
/// Returns the token body (escapes preserved verbatim) and the index just
/// past the closing quote.
fn lex_quoted(command: &str, open: usize) -> Result<(String, usize), DriverError> {
    let bytes = command.as_bytes();
    debug_assert_eq!(bytes[open], b'"');
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'"' => return Ok((command[open + 1..i].to_string(), i + 1)),
            _ => i += 1,
        }
    }
    Err(DriverError::UnterminatedQuote { position: open })
}
