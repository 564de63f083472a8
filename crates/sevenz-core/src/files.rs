//! File-list formatting for embedding in command strings.

/// Double-quote each file and join with single spaces.
///
/// The output is meant to be embedded in a command string and re-parsed by
/// the command tokenizer, so the quoting here must match what the
/// tokenizer extracts. An empty iterator yields an empty string.
#[must_use]
pub fn format_file_list<I, S>(files: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for file in files {
        out.push('"');
        out.push_str(file.as_ref());
        out.push_str("\" ");
    }
    out.trim_end().to_string()
}
