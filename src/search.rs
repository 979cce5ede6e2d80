//! Cross-document search over every cheat sheet in the store.
//!
//! Unlike the loader, documents that fail to read or decode are skipped
//! silently so one broken file never interrupts the scan. The search reads
//! files directly and does not touch the document cache.

use crate::document::{Entry, contains_folded, read_document};
use crate::store::{Store, command_name};
use std::fmt;
use std::path::PathBuf;

/// Per-topic cap on printed entries.
pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub documents: usize,
    pub topics: usize,
    pub entries: usize,
}

impl SearchSummary {
    pub fn is_empty(&self) -> bool {
        self.documents == 0
    }
}

/// Search every document in `store` for `term`.
///
/// An unreadable store root is treated like an empty one.
pub fn search_store(
    store: &Store,
    term: &str,
    max_per_topic: usize,
    writer: &mut impl fmt::Write,
) -> Result<SearchSummary, fmt::Error> {
    let files = store.document_files().unwrap_or_default();
    search_files(&files, term, max_per_topic, writer)
}

/// Search the given document files in order.
pub fn search_files(
    files: &[PathBuf],
    term: &str,
    max_per_topic: usize,
    writer: &mut impl fmt::Write,
) -> Result<SearchSummary, fmt::Error> {
    writeln!(writer, "🔍 Buscando '{term}' en todos los comandos...")?;
    writeln!(writer)?;

    let needle = term.to_lowercase();
    let mut summary = SearchSummary::default();

    for path in files {
        let Some(name) = command_name(path) else {
            continue;
        };
        let Ok(Some(document)) = read_document(path) else {
            continue;
        };

        let mut announced = false;
        for (topic, entries) in document.topics() {
            let relevant = relevant_entries(topic, entries, &needle, max_per_topic);
            if relevant.is_empty() {
                continue;
            }

            if !announced {
                writeln!(writer, "📖 {}:", name.to_uppercase())?;
                announced = true;
                summary.documents += 1;
            }
            summary.topics += 1;
            summary.entries += relevant.len();

            writeln!(writer, "  🔹 {topic}")?;
            for entry in relevant {
                writeln!(writer, "    - {}", entry.cmd_or_default())?;
            }
        }

        if announced {
            writeln!(writer)?;
        }
    }

    if summary.is_empty() {
        writeln!(writer, "❌ No se encontraron resultados en ningún comando")?;
    }
    Ok(summary)
}

/// Entries of one topic that match `needle`, capped at `max`.
///
/// When the topic name itself matches, every entry is relevant.
fn relevant_entries<'a>(
    topic: &str,
    entries: &'a [Entry],
    needle: &str,
    max: usize,
) -> Vec<&'a Entry> {
    let topic_matches = contains_folded(topic, needle);
    entries
        .iter()
        .filter(|entry| topic_matches || entry.matches(needle))
        .take(max)
        .collect()
}
