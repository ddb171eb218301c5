use std::sync::LazyLock;

use regex::Regex;

use crate::models::BookId;

/// What a book-level header announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookMarker {
    /// Title line of the edition (`1 Edition`); carries no book.
    Edition,
    /// The preface.
    Praefatio,
    /// A numbered book (`Buch II`).
    Book(BookId),
}

static EDITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+\s+Edition").expect("valid regex"));
static PRAEFATIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Praefatio\s*$").expect("valid regex"));
static BOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Buch|B\[uch\])\s+([IVX]+)\b").expect("valid regex")
});

/// Book-level headers: the edition title, `Praefatio`, `Buch <roman>`.
///
/// All syntax knowledge for book headers lives here.
pub struct BookHeader;

impl BookHeader {
    /// Recognizes a book header in trimmed paragraph text.
    pub fn parse(text: &str) -> Option<BookMarker> {
        if EDITION.is_match(text) {
            return Some(BookMarker::Edition);
        }
        if PRAEFATIO.is_match(text) {
            return Some(BookMarker::Praefatio);
        }
        let caps = BOOK.captures(text)?;
        BookId::from_roman(&caps[1]).map(BookMarker::Book)
    }
}
