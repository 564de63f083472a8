//! Path normalization helpers.
//!
//! Command strings carry forward- or backslash-separated paths; the
//! archiver is invoked with native separators, canonicalized lexically so
//! that not-yet-existing output paths still normalize.

use std::path::{Component, MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};

/// Replace the platform's native separator with `/` until stable.
///
/// Idempotent. Used for cross-platform comparison of paths, not for
/// building argument vectors.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    let mut current = path.to_string();
    loop {
        let replaced = current.replace(MAIN_SEPARATOR_STR, "/");
        if replaced == current {
            return replaced;
        }
        current = replaced;
    }
}

/// Map both `/` and `\` to the native separator.
#[must_use]
pub fn to_native_separators(path: &str) -> String {
    path.chars()
        .map(|c| {
            if c == '/' || c == '\\' {
                MAIN_SEPARATOR
            } else {
                c
            }
        })
        .collect()
}

/// Lexically canonicalize a path: collapse `.` and `..` components and
/// redundant separators without touching the filesystem.
#[must_use]
pub fn clean_path(path: &str) -> String {
    let mut out = PathBuf::new();
    let mut depth = 0usize;
    let mut rooted = false;
    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !rooted {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }
    if out.as_os_str().is_empty() {
        ".".to_string()
    } else {
        out.to_string_lossy().into_owned()
    }
}
