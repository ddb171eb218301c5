use crate::models::{BookId, Paragraph};

use super::{
    kinds::{BookHeader, Colophon, PoemHeader, Rubric, Verse},
    types::ParagraphClass,
};

/// Classifies paragraphs one at a time.
///
/// This is phase 1 of document building: each paragraph is classified
/// independently. The only context consulted is the current book, which a
/// digit-marked poem header may need.
pub struct ParagraphClassifier;

impl ParagraphClassifier {
    /// Classifies a paragraph, trying rules in fixed priority order:
    /// book header, poem header, rubric, colophon, verse.
    pub fn classify(&self, p: &Paragraph, current_book: Option<BookId>) -> ParagraphClass {
        if p.is_blank() {
            return ParagraphClass::Blank;
        }
        let text = p.trimmed();

        if let Some(marker) = BookHeader::parse(text) {
            return ParagraphClass::BookHeader(marker);
        }

        if let Some(header) = PoemHeader::parse(text, current_book) {
            return ParagraphClass::PoemHeader(header);
        }

        if Rubric::matches(p) {
            return ParagraphClass::Rubric(text.to_string());
        }

        if Colophon::matches(text) {
            return ParagraphClass::Colophon(text.to_string());
        }

        ParagraphClass::Verse {
            text: text.to_string(),
            indent: Verse::is_indented(p),
        }
    }
}
