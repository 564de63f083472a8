//! Domain types and ports for driving a 7-Zip-compatible archiver binary.
//!
//! This crate holds the pure half of the driver: switch configuration and
//! encoding, command micro-syntax parsing, path and file-list helpers,
//! typed output events, error types, and the ports the runtime implements.
//! Nothing in here spawns a process or touches the filesystem.

pub mod command;
pub mod error;
pub mod events;
pub mod files;
pub mod paths;
pub mod ports;
pub mod switches;

pub use command::CommandLine;
pub use error::{DriverError, DriverResult};
pub use events::{FileEvent, FileOp, extract_error_message, parse_file_event};
pub use files::format_file_list;
pub use ports::{ExitOutcome, NoopProgressSink, ProcessSpawner, ProcessStream, ProgressSink};
pub use switches::{SwitchValue, Switches};
