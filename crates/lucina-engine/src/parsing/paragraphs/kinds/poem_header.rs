use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::{BookId, Preposition};

/// Header patterns in priority order: Roman book marker, then digit marker.
/// The markers start with disjoint character classes, so at most one
/// pattern matches any text.
static PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^([IVX]+),\s*(\d+)\s+(?:(Ad|In)\s+)?(.+?)\.?$").expect("valid regex"),
        Regex::new(r"^(\d+),\s*(\d+)\s+(?:(Ad|In)\s+)?(.+?)\.?$").expect("valid regex"),
    ]
});

/// Words that start a rubric glued onto the end of a dedication.
static ATTACHED_RUBRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(?:Aurelius|Aurelii|Albrisii|liber|incipit)\b").expect("valid regex")
});

/// A parsed poem header: `<book>, <number> [Ad|In] <dedicatee>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemHeader {
    pub book: BookId,
    pub number: u32,
    pub preposition: Preposition,
    pub dedicatee: String,
    /// Rubric text that followed the dedicatee on the same paragraph.
    pub attached_rubric: Option<String>,
}

impl PoemHeader {
    /// Whether `text` has the shape of a poem header, ignoring book mapping.
    pub fn matches_grammar(text: &str) -> bool {
        PATTERNS.iter().any(|re| re.is_match(text))
    }

    /// Parses trimmed paragraph text as a poem header.
    ///
    /// Digit book markers map `1..=3` to `I..=III`; other digits take
    /// `current_book`, and without one the text is not a header.
    pub fn parse(text: &str, current_book: Option<BookId>) -> Option<Self> {
        let (pattern, caps): (usize, Captures<'_>) = PATTERNS
            .iter()
            .enumerate()
            .find_map(|(i, re)| re.captures(text).map(|c| (i, c)))?;

        let book = match pattern {
            0 => BookId::from_roman(&caps[1])?,
            _ => digit_book(&caps[1]).or(current_book)?,
        };
        let number: u32 = caps[2].parse().ok()?;
        let preposition = match caps.get(3).map(|m| m.as_str()) {
            Some("In") => Preposition::In,
            _ => Preposition::Ad,
        };
        let (dedicatee, attached_rubric) = split_attached_rubric(caps[4].trim());

        Some(Self {
            book,
            number,
            preposition,
            dedicatee,
            attached_rubric,
        })
    }
}

fn digit_book(digit: &str) -> Option<BookId> {
    match digit {
        "1" => Some(BookId::Numbered(1)),
        "2" => Some(BookId::Numbered(2)),
        "3" => Some(BookId::Numbered(3)),
        _ => None,
    }
}

fn split_attached_rubric(dedicatee: &str) -> (String, Option<String>) {
    match ATTACHED_RUBRIC.find(dedicatee) {
        Some(m) => (
            dedicatee[..m.start()].trim().to_string(),
            Some(dedicatee[m.start()..].trim().to_string()),
        ),
        None => (dedicatee.to_string(), None),
    }
}
