//! Switch configuration and encoding for archiver invocations.
//!
//! Switches are a tagged-variant map rather than a stringly-typed bag:
//! flag, valued, raw, wildcard and file-list switches each carry their own
//! payload, so nothing is type-sniffed at encode time. Insertion order is
//! preserved to keep encoded argument vectors reproducible.

use indexmap::IndexMap;

const FILES_KEY: &str = "files";
const RAW_KEY: &str = "raw";
const WILDCARDS_KEY: &str = "wildcards";

/// Boolean switches applied when the caller did not set them explicitly.
const DEFAULT_FLAGS: [(&str, bool); 5] = [
    ("so", false),
    ("spl", false),
    ("ssc", true),
    ("ssw", false),
    ("y", true),
];

/// Value carried by a single named switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchValue {
    /// Boolean flag. `false` emits nothing; `ssc` is the one exception
    /// with an explicit off form (`-ssc-`).
    Flag(bool),
    /// Valued flag, rendered as `-<name><value>`, with the value quoted
    /// when it contains a space.
    Value(String),
    /// Tokens appended verbatim. Escape hatch for flags not otherwise
    /// modelable, including repeatable ones.
    Raw(Vec<String>),
    /// Wildcard pattern hoisted to the front of the encoded block,
    /// unprefixed and unquoted.
    Wildcard(String),
    /// File list consumed by the runner; never emitted as a literal flag.
    Files(Vec<String>),
}

/// Ordered switch configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Switches {
    entries: IndexMap<String, SwitchValue>,
}

impl Switches {
    /// Empty configuration. Encoding it still yields the default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a boolean flag.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.entries.insert(name.into(), SwitchValue::Flag(on));
        self
    }

    /// Set a valued flag.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .insert(name.into(), SwitchValue::Value(value.into()));
        self
    }

    /// Append tokens verbatim to the encoded switch block.
    #[must_use]
    pub fn raw<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            RAW_KEY.to_string(),
            SwitchValue::Raw(tokens.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Set the wildcard pattern placed before all other switches.
    #[must_use]
    pub fn wildcards(mut self, pattern: impl Into<String>) -> Self {
        self.entries.insert(
            WILDCARDS_KEY.to_string(),
            SwitchValue::Wildcard(pattern.into()),
        );
        self
    }

    /// Select specific files for the operation. The runner expands these
    /// into their own argument tokens plus `-r` and `-aoa`.
    #[must_use]
    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            FILES_KEY.to_string(),
            SwitchValue::Files(files.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Single-file convenience for [`Switches::files`].
    #[must_use]
    pub fn file(self, file: impl Into<String>) -> Self {
        self.files([file.into()])
    }

    /// Look up a switch by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SwitchValue> {
        self.entries.get(name)
    }

    /// Selected files, when the `files` pseudo-switch is set.
    #[must_use]
    pub fn file_list(&self) -> Option<&[String]> {
        match self.entries.get(FILES_KEY) {
            Some(SwitchValue::Files(files)) => Some(files),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Encode into the ordered switch-argument block.
    ///
    /// Defaults are seeded ahead of caller entries; an explicit entry
    /// encodes at its own insertion position instead. Any wildcard entry
    /// is positioned first in the returned list.
    #[must_use]
    pub fn encode(&self) -> Vec<String> {
        let mut front = Vec::new();
        let mut rest = Vec::new();
        for (name, on) in DEFAULT_FLAGS {
            if !self.entries.contains_key(name) {
                encode_entry(name, &SwitchValue::Flag(on), &mut front, &mut rest);
            }
        }
        for (name, value) in &self.entries {
            encode_entry(name, value, &mut front, &mut rest);
        }
        front.append(&mut rest);
        front
    }
}

fn encode_entry(name: &str, value: &SwitchValue, front: &mut Vec<String>, rest: &mut Vec<String>) {
    match value {
        SwitchValue::Flag(on) => {
            // `ssc` is the only switch whose off state is itself a flag.
            if name == "ssc" {
                rest.push(if *on { "-ssc" } else { "-ssc-" }.to_string());
            } else if *on {
                rest.push(format!("-{name}"));
            }
        }
        SwitchValue::Value(v) => {
            if v.contains(' ') {
                rest.push(format!("-{name}\"{v}\""));
            } else {
                rest.push(format!("-{name}{v}"));
            }
        }
        SwitchValue::Raw(tokens) => rest.extend(tokens.iter().cloned()),
        SwitchValue::Wildcard(pattern) => front.push(pattern.clone()),
        SwitchValue::Files(_) => {}
    }
}
