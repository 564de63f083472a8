//! Error types for archiver invocations.
//!
//! One unified enum covers the invocation lifecycle, keeping error
//! plumbing out of the orchestration modules. Every invocation surfaces at
//! most one of these as its terminal result; nothing is retried at this
//! layer.

use thiserror::Error;

/// Errors produced by a single archiver invocation.
#[derive(Debug, Error)]
pub enum DriverError {
    // === Validation (detected before any process is spawned) ===
    /// Empty or whitespace-only command or binary name.
    #[error("command and binary must be non-empty")]
    EmptyInvocation,

    /// A quoted token in the command string was never closed.
    #[error("unterminated quote in command string at byte {position}")]
    UnterminatedQuote { position: usize },

    // === Archiver output ===
    /// The output contained an `Error:` report. Surfaces even when the
    /// process exits with status 0.
    #[error("archiver reported: {message}")]
    ArchiverReported { message: String },

    // === Process launch & exit ===
    /// The spawn capability failed; propagated verbatim.
    #[error("failed to launch archiver: {0}")]
    Launch(#[from] std::io::Error),

    /// Non-success exit with no parseable error text in the output.
    #[error("archiver exited with {}", exit_label(.code))]
    ExitFailure { code: Option<i32> },
}

/// Result alias for invocation operations.
pub type DriverResult<T> = Result<T, DriverError>;

fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |c| format!("exit code {c}"),
    )
}
