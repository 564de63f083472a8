//! Driver configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the binaries root.
pub const BINARIES_ROOT_ENV: &str = "SEVENZ_BINARIES_ROOT";

/// Configuration for an [`ArchiverRunner`](crate::ArchiverRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Root directory containing the `binaries/<platform>` tree.
    pub binaries_root: PathBuf,
}

impl DriverConfig {
    /// Use an explicit binaries root.
    pub fn new(binaries_root: impl Into<PathBuf>) -> Self {
        Self {
            binaries_root: binaries_root.into(),
        }
    }

    /// Resolve the default binaries root.
    ///
    /// Resolution order:
    /// 1. `SEVENZ_BINARIES_ROOT` environment variable (highest priority)
    /// 2. Directory of the current executable
    /// 3. Current working directory
    #[must_use]
    pub fn from_environment() -> Self {
        if let Ok(root) = env::var(BINARIES_ROOT_ENV) {
            return Self::new(root);
        }
        if let Ok(exe) = env::current_exe()
            && let Some(dir) = exe.parent()
        {
            return Self::new(dir);
        }
        Self::new(".")
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::from_environment()
    }
}
