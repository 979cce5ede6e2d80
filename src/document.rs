//! Deserializable representation of one cheat sheet (`cheats/<command>.json`).
//!
//! A document maps topic names to ordered example entries. Topic order is the
//! order found in the file and is what the display and search paths walk, so
//! the map type must preserve insertion order.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Rendered in place of a missing `cmd`.
pub const MISSING_CMD: &str = "N/A";
/// Rendered in place of a missing `desc`.
pub const MISSING_DESC: &str = "Sin descripción";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
/// One example within a topic: a literal command plus its description.
pub struct Entry {
    #[serde(default)]
    pub cmd: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Entry {
    pub fn cmd_or_default(&self) -> &str {
        self.cmd.as_deref().unwrap_or(MISSING_CMD)
    }

    pub fn desc_or_default(&self) -> &str {
        self.desc.as_deref().unwrap_or(MISSING_DESC)
    }

    /// Case-insensitive substring match against `cmd` or `desc`.
    ///
    /// `needle` must already be lowercased. Missing fields match as empty
    /// strings, never as their rendered defaults.
    pub fn matches(&self, needle: &str) -> bool {
        contains_folded(self.cmd.as_deref().unwrap_or_default(), needle)
            || contains_folded(self.desc.as_deref().unwrap_or_default(), needle)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
/// Parsed cheat sheet: topic name to entries, in file order.
pub struct Document {
    topics: IndexMap<String, Vec<Entry>>,
}

impl Document {
    /// Iterates topics in the order they appear in the source file.
    pub fn topics(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.topics
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn topic(&self, name: &str) -> Option<&[Entry]> {
        self.topics.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Case-insensitive substring test; `needle` is expected in lowercase.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Parse a cheat sheet from JSON text.
pub fn parse_document(data: &str) -> Result<Document> {
    let document: Document = serde_json::from_str(data)?;
    Ok(document)
}

/// Read and parse a cheat sheet in one pass.
///
/// A missing file is `Ok(None)` rather than an error; every other I/O or
/// decode failure is returned with the path attached.
pub fn read_document(path: &Path) -> Result<Option<Document>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("reading {}", path.display())),
    };
    parse_document(&data)
        .with_context(|| format!("parsing {}", path.display()))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn topics_keep_file_order() {
        let doc = parse_document(
            r#"{"Zeta": [{"cmd": "z"}], "Alpha": [{"cmd": "a"}], "Mid": []}"#,
        )
        .unwrap();
        let names: Vec<&str> = doc.topics().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn entries_keep_file_order() {
        let doc = parse_document(
            r#"{"Branching": [{"cmd": "git branch"}, {"cmd": "git checkout -b x"}, {"cmd": "git branch -d x"}]}"#,
        )
        .unwrap();
        let cmds: Vec<&str> = doc
            .topic("Branching")
            .unwrap()
            .iter()
            .map(Entry::cmd_or_default)
            .collect();
        assert_eq!(cmds, vec!["git branch", "git checkout -b x", "git branch -d x"]);
    }

    #[test]
    fn missing_fields_render_defaults() {
        let doc = parse_document(r#"{"T": [{}]}"#).unwrap();
        let entry = &doc.topic("T").unwrap()[0];
        assert_eq!(entry.cmd_or_default(), "N/A");
        assert_eq!(entry.desc_or_default(), "Sin descripción");
    }

    #[test]
    fn missing_fields_match_as_empty() {
        let entry = Entry::default();
        assert!(!entry.matches("n/a"));
        assert!(entry.matches(""));
    }

    #[test]
    fn entry_matches_desc_case_insensitively() {
        let entry = Entry {
            cmd: Some("git stash".into()),
            desc: Some("Guardar Cambios temporales".into()),
        };
        assert!(entry.matches("cambios"));
        assert!(entry.matches("stash"));
        assert!(!entry.matches("commit"));
    }

    #[test]
    fn rejects_non_array_topic() {
        assert!(parse_document(r#"{"T": "nope"}"#).is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let result = read_document(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = read_document(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
    }
}
