use crate::models::Paragraph;

/// Verse line (marker struct).
///
/// Verse has no syntax of its own: it is whatever is left once headers,
/// rubrics and the colophon are ruled out.
pub struct Verse;

impl Verse {
    /// Indented if the paragraph has a left indent or its raw text starts
    /// with whitespace.
    pub fn is_indented(p: &Paragraph) -> bool {
        p.has_left_indent || p.starts_with_whitespace()
    }
}
