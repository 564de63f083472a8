//! Port definitions for process spawning and progress delivery.
//!
//! Ports define what the invocation core expects from infrastructure,
//! without leaking implementation detail into signatures. The tokio-backed
//! spawner lives in the runtime crate; tests substitute scripted fakes.

use crate::error::DriverResult;
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::{mpsc, oneshot};

/// Terminal status of a spawned archiver process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    /// Successful termination (exit code 0).
    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Output and completion channels for one spawned process.
///
/// `lines` yields output lines (without trailing newlines) in emission
/// order; `exit` resolves once, strictly after `lines` has closed.
#[derive(Debug)]
pub struct ProcessStream {
    pub lines: mpsc::Receiver<String>,
    pub exit: oneshot::Receiver<DriverResult<ExitOutcome>>,
}

/// Capability to launch the archiver with a finished argument vector.
#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Launch `binary` with `args`, output piped.
    async fn spawn(&self, binary: &Path, args: &[String]) -> DriverResult<ProcessStream>;
}

/// Sink for intermediate progress notifications.
pub trait ProgressSink: Send + Sync {
    /// Deliver one raw output line (without its trailing newline).
    fn line(&self, line: &str);
}

/// Sink that discards all progress lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn line(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_code_zero_is_success() {
        assert!(ExitOutcome { code: Some(0) }.success());
        assert!(!ExitOutcome { code: Some(2) }.success());
        assert!(!ExitOutcome { code: None }.success());
    }
}
