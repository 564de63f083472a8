//! Tokio-backed process spawner.
//!
//! Archiver binaries can emit non-UTF8 bytes, so lines are read as bytes
//! and decoded lossily; a reader killed by invalid UTF-8 would otherwise
//! drop the tail of the output. stdout and stderr are merged into one
//! line channel, and the exit outcome is reported only after both readers
//! have drained, which is what keeps the terminal result strictly after
//! all progress lines.

use async_trait::async_trait;
use sevenz_core::ports::{ExitOutcome, ProcessSpawner, ProcessStream};
use sevenz_core::{DriverError, DriverResult};
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

/// Line channel capacity per spawned process.
const LINE_CHANNEL_CAPACITY: usize = 64;

/// [`ProcessSpawner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpawner;

#[async_trait]
impl ProcessSpawner for TokioSpawner {
    async fn spawn(&self, binary: &Path, args: &[String]) -> DriverResult<ProcessStream> {
        let mut child = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let (line_tx, line_rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);
        let (exit_tx, exit_rx) = oneshot::channel();
        let stdout = child.stdout.take().map(|s| read_lines(s, line_tx.clone()));
        let stderr = child.stderr.take().map(|s| read_lines(s, line_tx.clone()));
        drop(line_tx);

        tokio::spawn(async move {
            if let Some(task) = stdout {
                let _ = task.await;
            }
            if let Some(task) = stderr {
                let _ = task.await;
            }
            let outcome = child
                .wait()
                .await
                .map(|status| ExitOutcome {
                    code: status.code(),
                })
                .map_err(DriverError::Launch);
            let _ = exit_tx.send(outcome);
        });

        Ok(ProcessStream {
            lines: line_rx,
            exit: exit_rx,
        })
    }
}

/// Read lines as raw bytes with lossy UTF-8 decoding, forwarding each to
/// the merged line channel.
fn read_lines(
    stream: impl AsyncRead + Unpin + Send + 'static,
    tx: mpsc::Sender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut reader = BufReader::new(stream);
        let mut buf: Vec<u8> = Vec::with_capacity(1024);
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break, // EOF
                Ok(_) => {
                    // Trim trailing newline(s)
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                        if buf.last() == Some(&b'\r') {
                            buf.pop();
                        }
                    }
                    let line = String::from_utf8_lossy(&buf).to_string();
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "output reader exiting on read error");
                    break;
                }
            }
        }
    })
}
