use super::kinds::{BookMarker, PoemHeader};

/// The outcome of classifying one paragraph on its own.
///
/// Whether a [`ParagraphClass::Verse`] is kept depends on builder state: with
/// no poem open it is counted as unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphClass {
    /// Empty or whitespace only.
    Blank,
    BookHeader(BookMarker),
    PoemHeader(PoemHeader),
    /// Rubric text, trimmed.
    Rubric(String),
    /// Colophon text, trimmed.
    Colophon(String),
    /// Verse text, trimmed, with its indentation flag.
    Verse { text: String, indent: bool },
}

impl ParagraphClass {
    /// Short label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            ParagraphClass::Blank => "blank",
            ParagraphClass::BookHeader(_) => "book-header",
            ParagraphClass::PoemHeader(_) => "poem-header",
            ParagraphClass::Rubric(_) => "rubric",
            ParagraphClass::Colophon(_) => "colophon",
            ParagraphClass::Verse { .. } => "verse",
        }
    }
}
