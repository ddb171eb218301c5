use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters collected while building a document.
///
/// Content problems never fail a parse; they end up here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub paragraphs: usize,
    pub blank: usize,
    pub book_headers: usize,
    pub poem_headers: usize,
    /// Poems emitted, praefatio included.
    pub poems: usize,
    /// Verse lines across emitted poems.
    pub lines: usize,
    pub rubrics: usize,
    pub colophon: usize,
    /// Non-empty paragraphs seen while no poem was open.
    pub unclassified: usize,
    /// Poems closed with no verse.
    pub dropped_poems: usize,
    /// Pending rubrics replaced before any poem took them.
    pub superseded_rubrics: usize,
    /// Emitted poems whose person reference came from the fallback heuristic.
    pub fallback_person_refs: usize,
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("paragraphs", self.paragraphs),
            ("blank", self.blank),
            ("book headers", self.book_headers),
            ("poem headers", self.poem_headers),
            ("poems", self.poems),
            ("lines", self.lines),
            ("rubrics", self.rubrics),
            ("colophon", self.colophon),
            ("unclassified", self.unclassified),
            ("dropped poems", self.dropped_poems),
            ("superseded rubrics", self.superseded_rubrics),
            ("fallback person refs", self.fallback_person_refs),
        ];
        for (name, value) in rows {
            writeln!(f, "{name:<22}{value}")?;
        }
        Ok(())
    }
}
