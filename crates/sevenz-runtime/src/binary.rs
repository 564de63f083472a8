//! Archiver binary resolution.
//!
//! Binaries ship in a fixed layout under a binaries root:
//! `<root>/binaries/<platform>[/other32]/<name>[.exe]`. Resolution is pure
//! path construction; a missing executable is only discovered at spawn
//! time.

use std::path::{Path, PathBuf};

/// Location of the executable to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinary {
    /// Directory holding the binary.
    pub directory: PathBuf,
    /// File name, with `.exe` appended on Windows.
    pub filename: String,
}

impl ResolvedBinary {
    /// Full path to the executable.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Resolve the platform binary under `root`.
///
/// With `use_other32` set, the 32-bit fallback directory is selected
/// instead of the platform default.
#[must_use]
pub fn resolve_binary(root: &Path, use_other32: bool, name: &str) -> ResolvedBinary {
    resolve_for(
        root,
        platform_dir(),
        cfg!(target_os = "windows"),
        use_other32,
        name,
    )
}

/// Platform directory component, matching the layout the binaries ship
/// with (`win32`, `darwin`, `linux`, ...).
fn platform_dir() -> &'static str {
    if cfg!(target_os = "windows") {
        "win32"
    } else if cfg!(target_os = "macos") {
        "darwin"
    } else {
        std::env::consts::OS
    }
}

fn resolve_for(
    root: &Path,
    platform: &str,
    windows: bool,
    use_other32: bool,
    name: &str,
) -> ResolvedBinary {
    let mut directory = root.join("binaries").join(platform);
    if use_other32 {
        directory.push("other32");
    }
    let filename = if windows {
        format!("{name}.exe")
    } else {
        name.to_string()
    };
    ResolvedBinary {
        directory,
        filename,
    }
}
