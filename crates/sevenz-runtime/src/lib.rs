//! Process runtime for the sevenz archiver driver.
//!
//! Resolves the platform binary, builds argument vectors from switch
//! configuration, spawns the archiver with piped output, and turns its
//! textual output into progress lines and typed errors.

pub mod binary;
pub mod commands;
pub mod config;
pub mod runner;
pub mod spawner;

pub use binary::{ResolvedBinary, resolve_binary};
pub use commands::DEFAULT_BINARY;
pub use config::{BINARIES_ROOT_ENV, DriverConfig};
pub use runner::{ArchiverRunner, build_args};
pub use spawner::TokioSpawner;

// Re-export the domain crate's surface so callers need one dependency.
pub use sevenz_core::{
    CommandLine, DriverError, DriverResult, ExitOutcome, FileEvent, FileOp, NoopProgressSink,
    ProcessSpawner, ProcessStream, ProgressSink, SwitchValue, Switches, extract_error_message,
    format_file_list, parse_file_event,
};
