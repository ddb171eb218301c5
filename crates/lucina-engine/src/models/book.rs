use std::fmt;

use serde::{Deserialize, Serialize};

use super::poem::Poem;

/// Identifies a book of the collection.
///
/// The praefatio sorts before every numbered book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BookId {
    Praefatio,
    Numbered(u32),
}

impl BookId {
    /// Parses a Roman numeral such as `III`, using the digits `I` to `C`
    /// that [`Display`](fmt::Display) writes.
    pub fn from_roman(s: &str) -> Option<Self> {
        roman_to_u32(s).map(BookId::Numbered)
    }

    pub fn is_praefatio(self) -> bool {
        matches!(self, BookId::Praefatio)
    }

    pub fn number(self) -> Option<u32> {
        match self {
            BookId::Praefatio => None,
            BookId::Numbered(n) => Some(n),
        }
    }

    /// Latin ordinal used in book headings (`Liber Primus`).
    pub fn latin_ordinal(self) -> String {
        match self {
            BookId::Praefatio => "Praefatio".to_string(),
            BookId::Numbered(1) => "Primus".to_string(),
            BookId::Numbered(2) => "Secundus".to_string(),
            BookId::Numbered(3) => "Tertius".to_string(),
            BookId::Numbered(n) => to_roman(n),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Praefatio => f.write_str("praefatio"),
            BookId::Numbered(n) => f.write_str(&to_roman(*n)),
        }
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for BookId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("praefatio") {
            return Ok(BookId::Praefatio);
        }
        BookId::from_roman(&value).ok_or_else(|| format!("not a book id: {value}"))
    }
}

/// A book with its poems in ascending number order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub poems: Vec<Poem>,
}

impl Book {
    pub fn line_count(&self) -> usize {
        self.poems.iter().map(|p| p.lines.len()).sum()
    }
}

fn roman_to_u32(s: &str) -> Option<u32> {
    let values = s
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' => Some(1i64),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            _ => None,
        })
        .collect::<Option<Vec<i64>>>()?;

    // subtractive notation: a smaller value before a larger one is negative
    let total = values
        .iter()
        .enumerate()
        .fold(0i64, |acc, (i, v)| match values.get(i + 1) {
            Some(next) if next > v => acc - v,
            _ => acc + v,
        });
    u32::try_from(total).ok().filter(|n| *n > 0)
}

fn to_roman(mut n: u32) -> String {
    const TABLE: [(u32, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, glyph) in TABLE {
        while n >= value {
            out.push_str(glyph);
            n -= value;
        }
    }
    out
}
