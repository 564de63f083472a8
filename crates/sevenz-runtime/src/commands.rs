//! Thin command wrappers.
//!
//! Each wrapper pre-formats the archiver sub-command string and delegates
//! to [`ArchiverRunner::run`]; nothing here adds behavior beyond command
//! formatting.

use crate::runner::ArchiverRunner;
use sevenz_core::{DriverResult, Switches, format_file_list};

/// Default archiver binary name, resolved against the configured binaries
/// root at run time.
pub const DEFAULT_BINARY: &str = "7za";

impl ArchiverRunner {
    /// `a` — add files to an archive, creating it when missing.
    pub async fn add<I, S>(
        &self,
        archive: &str,
        files: I,
        switches: &Switches,
    ) -> DriverResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let command = format!("a \"{archive}\" {}", format_file_list(files));
        self.run(DEFAULT_BINARY, command.trim_end(), switches, false)
            .await
    }

    /// `d` — delete the listed files from an archive.
    pub async fn delete<I, S>(
        &self,
        archive: &str,
        files: I,
        switches: &Switches,
    ) -> DriverResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let switches = switches.clone().files(files);
        self.run(DEFAULT_BINARY, &format!("d \"{archive}\""), &switches, false)
            .await
    }

    /// `e` — extract an archive into `destination`, flattening paths.
    pub async fn extract(
        &self,
        archive: &str,
        destination: &str,
        switches: &Switches,
    ) -> DriverResult<Vec<String>> {
        let command = format!("e \"{archive}\" -o\"{destination}\"");
        self.run(DEFAULT_BINARY, &command, switches, false).await
    }

    /// `x` — extract an archive into `destination` with full paths.
    pub async fn extract_full(
        &self,
        archive: &str,
        destination: &str,
        switches: &Switches,
    ) -> DriverResult<Vec<String>> {
        let command = format!("x \"{archive}\" -o\"{destination}\"");
        self.run(DEFAULT_BINARY, &command, switches, false).await
    }

    /// `l` — list archive contents.
    pub async fn list(&self, archive: &str, switches: &Switches) -> DriverResult<Vec<String>> {
        self.run(DEFAULT_BINARY, &format!("l \"{archive}\""), switches, false)
            .await
    }

    /// `rn` — rename entries inside an archive, given as old/new pairs.
    pub async fn rename<I, S>(
        &self,
        archive: &str,
        pairs: I,
        switches: &Switches,
    ) -> DriverResult<Vec<String>>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let flat: Vec<String> = pairs
            .into_iter()
            .flat_map(|(old, new)| [old.as_ref().to_string(), new.as_ref().to_string()])
            .collect();
        let command = format!("rn \"{archive}\" {}", format_file_list(&flat));
        self.run(DEFAULT_BINARY, command.trim_end(), switches, false)
            .await
    }

    /// `t` — test archive integrity.
    pub async fn test(&self, archive: &str, switches: &Switches) -> DriverResult<Vec<String>> {
        self.run(DEFAULT_BINARY, &format!("t \"{archive}\""), switches, false)
            .await
    }

    /// `u` — update the listed files inside an archive.
    pub async fn update<I, S>(
        &self,
        archive: &str,
        files: I,
        switches: &Switches,
    ) -> DriverResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let command = format!("u \"{archive}\" {}", format_file_list(files));
        self.run(DEFAULT_BINARY, command.trim_end(), switches, false)
            .await
    }
}
