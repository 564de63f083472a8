//! Typed interpretation of archiver output.
//!
//! With the `-bb2` verbosity flag the archiver prints one line per
//! processed file, prefixed with a short operation marker. Failures are
//! sometimes reported only as an `Error:` line in the output while the
//! process still exits successfully, so the extractor here is what decides
//! whether an invocation actually failed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `Error:` followed by an optional line break, then the message text.
static ERROR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Error:(?:\r\n|\r|\n)?(.*)").expect("static pattern"));

/// Per-file operation marker from `-bb2` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOp {
    /// `+` — file added to the archive.
    Added,
    /// `U` — existing archive entry updated.
    Updated,
    /// `-` — file extracted (or removed, for delete operations).
    Extracted,
    /// `T` — file tested.
    Tested,
    /// `.` — file skipped.
    Skipped,
}

/// One per-file progress line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEvent {
    pub op: FileOp,
    pub path: String,
}

/// Parse a `-bb2` per-file line. Returns `None` for anything else
/// (headers, blank lines, summary output).
#[must_use]
pub fn parse_file_event(line: &str) -> Option<FileEvent> {
    let marker = line.get(..2)?;
    let path = line.get(2..)?;
    let op = match marker {
        "+ " => FileOp::Added,
        "U " => FileOp::Updated,
        "- " => FileOp::Extracted,
        "T " => FileOp::Tested,
        ". " => FileOp::Skipped,
        _ => return None,
    };
    if path.is_empty() {
        return None;
    }
    Some(FileEvent {
        op,
        path: path.to_string(),
    })
}

/// Extract the message from an `Error:` line, if present.
///
/// An empty remainder (the message continues on a later line) is not a
/// match, so a later complete report can still be captured.
#[must_use]
pub fn extract_error_message(line: &str) -> Option<String> {
    let captures = ERROR_PATTERN.captures(line)?;
    let message = captures[1].trim().to_string();
    if message.is_empty() { None } else { Some(message) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_per_file_markers() {
        assert_eq!(
            parse_file_event("+ dir/file.txt"),
            Some(FileEvent {
                op: FileOp::Added,
                path: "dir/file.txt".to_string(),
            })
        );
        assert_eq!(
            parse_file_event("U changed.txt").map(|e| e.op),
            Some(FileOp::Updated)
        );
        assert_eq!(
            parse_file_event("- out.txt").map(|e| e.op),
            Some(FileOp::Extracted)
        );
    }

    #[test]
    fn ignores_non_progress_lines() {
        assert_eq!(parse_file_event("Everything is Ok"), None);
        assert_eq!(parse_file_event(""), None);
        assert_eq!(parse_file_event("+ "), None);
    }

    #[test]
    fn extracts_error_messages() {
        assert_eq!(
            extract_error_message("Error: Cannot find archive").as_deref(),
            Some("Cannot find archive")
        );
    }

    #[test]
    fn error_message_may_follow_a_line_break() {
        assert_eq!(
            extract_error_message("Error:\nIncorrect command line").as_deref(),
            Some("Incorrect command line")
        );
    }

    #[test]
    fn bare_error_marker_is_not_a_match() {
        assert_eq!(extract_error_message("Error:"), None);
        assert_eq!(extract_error_message("Everything is Ok"), None);
    }

    #[test]
    fn trailing_carriage_return_is_trimmed() {
        assert_eq!(
            extract_error_message("Error: Unsupported command\r").as_deref(),
            Some("Unsupported command")
        );
    }

    #[test]
    fn file_event_serializes_with_lowercase_op() {
        let event = FileEvent {
            op: FileOp::Added,
            path: "dir/file.txt".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"op\":\"added\""));
        assert!(json.contains("\"path\":\"dir/file.txt\""));
    }
}
