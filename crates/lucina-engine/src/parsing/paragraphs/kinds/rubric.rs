use std::sync::LazyLock;

use regex::Regex;

use super::poem_header::PoemHeader;
use crate::models::Paragraph;

/// Verse usually opens with a capitalized word followed by another word.
static VERSE_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+\s+\w+").expect("valid regex"));

/// Rubric heading: short, not verse-shaped, italic or keyworded.
pub struct Rubric;

impl Rubric {
    /// Rubrics are shorter than this many characters.
    pub const MAX_CHARS: usize = 100;

    /// Lowercase keywords marking rubric text (author name, book incipits).
    pub const KEYWORDS: &'static [&'static str] = &[
        "aurelii",
        "laurentii",
        "albrisii",
        "lucina",
        "incipit",
        "liber",
        "secundus",
        "tercius",
        "tertius",
    ];

    pub fn matches(p: &Paragraph) -> bool {
        let text = p.trimmed();
        if text.chars().count() >= Self::MAX_CHARS || VERSE_SHAPED.is_match(text) {
            return false;
        }
        if PoemHeader::matches_grammar(text) {
            return false;
        }
        p.is_italic || Self::has_keyword(text)
    }

    fn has_keyword(text: &str) -> bool {
        let lower = text.to_lowercase();
        Self::KEYWORDS.iter().any(|k| lower.contains(k))
    }
}
