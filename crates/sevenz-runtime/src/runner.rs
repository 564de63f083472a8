//! Invocation orchestration.
//!
//! The runner builds the argument vector synchronously, spawns the
//! resolved binary through the spawner port, forwards every output line to
//! the progress sink while scanning for an embedded `Error:` report, and
//! produces exactly one terminal result per invocation. The archiver
//! reports some failures only through that pattern while still exiting
//! with status 0, so output content decides success before the exit code
//! does.

use crate::binary::resolve_binary;
use crate::config::DriverConfig;
use crate::spawner::TokioSpawner;
use sevenz_core::paths::{clean_path, to_native_separators};
use sevenz_core::ports::{NoopProgressSink, ProcessSpawner, ProgressSink};
use sevenz_core::{CommandLine, DriverError, DriverResult, Switches, extract_error_message};
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives an archiver binary resolved against a configured binaries root.
pub struct ArchiverRunner {
    config: DriverConfig,
    spawner: Arc<dyn ProcessSpawner>,
}

impl ArchiverRunner {
    /// Runner with the tokio-backed spawner.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self::with_spawner(config, Arc::new(TokioSpawner))
    }

    /// Runner with a custom spawner implementation.
    #[must_use]
    pub fn with_spawner(config: DriverConfig, spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self { config, spawner }
    }

    /// Run one invocation, discarding progress output.
    ///
    /// Resolves with the final argument vector, or fails with the single
    /// terminal error of the invocation (see [`DriverError`]).
    pub async fn run(
        &self,
        binary: &str,
        command: &str,
        switches: &Switches,
        use_other32: bool,
    ) -> DriverResult<Vec<String>> {
        self.run_with_sink(binary, command, switches, use_other32, &NoopProgressSink)
            .await
    }

    /// Run one invocation, forwarding each output line to `sink`.
    ///
    /// All progress lines are delivered before the terminal result, and a
    /// given invocation's lines never interleave with another invocation's
    /// sink.
    pub async fn run_with_sink(
        &self,
        binary: &str,
        command: &str,
        switches: &Switches,
        use_other32: bool,
        sink: &dyn ProgressSink,
    ) -> DriverResult<Vec<String>> {
        if binary.trim().is_empty() || command.trim().is_empty() {
            return Err(DriverError::EmptyInvocation);
        }

        let resolved = resolve_binary(&self.config.binaries_root, use_other32, binary);
        let args = build_args(command, switches)?;
        let executable = resolved.full_path();
        debug!(binary = %executable.display(), ?args, "spawning archiver");

        let mut stream = self.spawner.spawn(&executable, &args).await?;

        // First `Error:` report wins; later matches are ignored.
        let mut reported: Option<String> = None;
        while let Some(line) = stream.lines.recv().await {
            sink.line(&line);
            if reported.is_none() {
                reported = extract_error_message(&line);
            }
        }

        let outcome = stream
            .exit
            .await
            .map_err(|_| DriverError::Launch(std::io::Error::other("exit outcome never reported")))??;

        if let Some(message) = reported {
            warn!(%message, "archiver reported an error in its output");
            return Err(DriverError::ArchiverReported { message });
        }
        if !outcome.success() {
            return Err(DriverError::ExitFailure { code: outcome.code });
        }
        Ok(args)
    }
}

/// Build the final argument vector for one invocation.
///
/// Token order: sub-command, path tokens, output token, file-list tokens
/// (with `-r` and `-aoa`), encoded switches, `-bb2`. The caller's switches
/// are read, never mutated.
pub fn build_args(command: &str, switches: &Switches) -> DriverResult<Vec<String>> {
    let parsed = CommandLine::parse(command)?;

    let mut args = vec![parsed.sub_command];
    for path in &parsed.paths {
        args.push(clean_path(&to_native_separators(path)));
    }
    // The output token always wins over a generic path capture and is
    // always the last path-carrying argument.
    if let Some(output) = &parsed.output {
        args.push(format!("-o{}", clean_path(&to_native_separators(output))));
    }
    if let Some(files) = switches.file_list() {
        args.extend(files.iter().cloned());
        // Selecting specific files implies recursive matching and silent
        // overwrite.
        args.push("-r".to_string());
        args.push("-aoa".to_string());
    }
    args.extend(switches.encode());
    // Machine-readable per-file progress output.
    args.push("-bb2".to_string());
    Ok(args)
}
