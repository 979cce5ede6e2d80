//! Renders a single cheat sheet, optionally restricted to matching topics.

use crate::document::{Document, contains_folded};
use std::fmt;

/// Write every topic of `document` whose name contains `filter`.
///
/// The filter is case-insensitive and looks at topic names only; entries of
/// a retained topic are always printed in full. An empty filter is the same
/// as no filter. Returns the number of topics written.
pub fn render_document(
    document: &Document,
    filter: Option<&str>,
    writer: &mut impl fmt::Write,
) -> Result<usize, fmt::Error> {
    let filter = filter.filter(|text| !text.is_empty());
    let needle = filter.map(str::to_lowercase);

    let mut shown = 0;
    for (topic, entries) in document.topics() {
        if let Some(needle) = needle.as_deref() {
            if !contains_folded(topic, needle) {
                continue;
            }
        }

        shown += 1;
        writeln!(writer, "🔹 {topic}")?;
        for entry in entries {
            writeln!(
                writer,
                "  - {}: {}",
                entry.cmd_or_default(),
                entry.desc_or_default()
            )?;
        }
    }

    if shown == 0 {
        match filter {
            Some(text) => writeln!(writer, "❌ No se encontraron resultados para '{text}'")?,
            None => writeln!(writer, "❌ No se encontraron resultados")?,
        }
    }
    Ok(shown)
}

/// Banner printed before a document in lookup mode.
pub fn render_lookup_header(command: &str, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer)?;
    writeln!(writer, "📖 {} REFERENCIA RÁPIDA", command.to_uppercase())?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;

    fn git() -> Document {
        parse_document(
            r#"{
                "Branching": [{"cmd": "git branch", "desc": "list branches"}],
                "Commits": [{"cmd": "git commit -m msg"}, {"desc": "orphan"}],
                "Remote branches": [{"cmd": "git push -u origin x", "desc": "publish"}]
            }"#,
        )
        .unwrap()
    }

    fn render(doc: &Document, filter: Option<&str>) -> (usize, String) {
        let mut out = String::new();
        let shown = render_document(doc, filter, &mut out).unwrap();
        (shown, out)
    }

    #[test]
    fn unfiltered_prints_every_topic_in_order() {
        let (shown, out) = render(&git(), None);
        assert_eq!(shown, 3);
        assert_eq!(
            out,
            "🔹 Branching\n  - git branch: list branches\n\
             🔹 Commits\n  - git commit -m msg: Sin descripción\n  - N/A: orphan\n\
             🔹 Remote branches\n  - git push -u origin x: publish\n"
        );
    }

    #[test]
    fn filter_selects_topic_subsequence_case_insensitively() {
        let (shown, out) = render(&git(), Some("BRANCH"));
        assert_eq!(shown, 2);
        let topics: Vec<&str> = out
            .lines()
            .filter_map(|line| line.strip_prefix("🔹 "))
            .collect();
        assert_eq!(topics, vec!["Branching", "Remote branches"]);
    }

    #[test]
    fn filter_ignores_entry_contents() {
        let (shown, out) = render(&git(), Some("publish"));
        assert_eq!(shown, 0);
        assert_eq!(out, "❌ No se encontraron resultados para 'publish'\n");
    }

    #[test]
    fn empty_filter_behaves_as_none() {
        assert_eq!(render(&git(), Some("")), render(&git(), None));
    }

    #[test]
    fn empty_document_reports_no_results() {
        let (shown, out) = render(&Document::default(), None);
        assert_eq!(shown, 0);
        assert_eq!(out, "❌ No se encontraron resultados\n");
    }

    #[test]
    fn header_uppercases_command() {
        let mut out = String::new();
        render_lookup_header("git", &mut out).unwrap();
        assert_eq!(out, "\n📖 GIT REFERENCIA RÁPIDA\n\n");
    }
}
