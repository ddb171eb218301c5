use std::fmt;

use serde::{Deserialize, Serialize};

use super::{book::BookId, person::PersonRef};

/// A single verse line. `line_number` is 1-based within its poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseLine {
    pub text: String,
    pub indent: bool,
    pub line_number: u32,
}

/// Preposition introducing the dedication line of a poem header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preposition {
    /// `Ad`: addressed or dedicated to.
    #[default]
    Ad,
    /// `In`: invective against.
    In,
}

impl Preposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Preposition::Ad => "Ad",
            Preposition::In => "In",
        }
    }
}

/// Metrical form, guessed from the indentation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meter {
    Elegiac,
    Sapphic,
    Hendecasyllabic,
    Unknown,
}

impl Meter {
    pub fn as_str(self) -> &'static str {
        match self {
            Meter::Elegiac => "elegiac",
            Meter::Sapphic => "sapphic",
            Meter::Hendecasyllabic => "hendecasyllabic",
            Meter::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Invective,
    Epitaph,
    Prayer,
    Erotic,
    Epideictic,
    Paraenesis,
    Epistle,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Invective => "invective",
            Genre::Epitaph => "epitaph",
            Genre::Prayer => "prayer",
            Genre::Erotic => "erotic",
            Genre::Epideictic => "epideictic",
            Genre::Paraenesis => "paraenesis",
            Genre::Epistle => "epistle",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A poem: header data, rubrics and verse.
///
/// The praefatio is stored as a poem of [`BookId::Praefatio`] with number 0
/// and an empty dedicatee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    pub book: BookId,
    pub number: u32,
    pub preposition: Preposition,
    pub dedicatee: String,
    pub person_ref: Option<PersonRef>,
    pub rubrics: Vec<String>,
    pub lines: Vec<VerseLine>,
    pub meter: Meter,
    pub genre: Genre,
    /// 0 for the first poem with this book and number, 1 for the second,
    /// and so on. Assigned at assembly.
    #[serde(default)]
    pub occurrence: u32,
}

impl Poem {
    /// Identifier used for `xml:id` and as JSON key, e.g. `poem-I.12`.
    /// Repeated numbers get a letter suffix: `poem-I.12-b`.
    pub fn id(&self) -> String {
        let base = match self.book {
            BookId::Praefatio => "praefatio".to_string(),
            BookId::Numbered(_) => format!("poem-{}.{}", self.book, self.number),
        };
        base + &self.occurrence_suffix()
    }

    /// Prefix of the verse line ids: `praef` for the praefatio, otherwise
    /// the poem id.
    pub fn line_id_prefix(&self) -> String {
        match self.book {
            BookId::Praefatio => format!("praef{}", self.occurrence_suffix()),
            BookId::Numbered(_) => self.id(),
        }
    }

    fn occurrence_suffix(&self) -> String {
        match self.occurrence {
            0 => String::new(),
            n @ 1..=25 => format!("-{}", char::from(b'a' + n as u8)),
            n => format!("-{}", n + 1),
        }
    }

    /// Header label as printed in the source, e.g. `I, 12`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.book, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem(book: BookId, number: u32) -> Poem {
        Poem {
            book,
            number,
            preposition: Preposition::Ad,
            dedicatee: String::new(),
            person_ref: None,
            rubrics: vec![],
            lines: vec![],
            meter: Meter::Unknown,
            genre: Genre::Epistle,
            occurrence: 0,
        }
    }

    #[test]
    fn poem_ids_follow_book_and_number() {
        assert_eq!(poem(BookId::Numbered(3), 12).id(), "poem-III.12");
        assert_eq!(poem(BookId::Praefatio, 0).id(), "praefatio");
    }

    #[test]
    fn repeated_numbers_get_suffixes() {
        let mut p = poem(BookId::Numbered(1), 2);
        p.occurrence = 1;
        assert_eq!(p.id(), "poem-I.2-b");
        p.occurrence = 2;
        assert_eq!(p.line_id_prefix(), "poem-I.2-c");
        p.occurrence = 30;
        assert_eq!(p.id(), "poem-I.2-31");
    }

    #[test]
    fn praefatio_lines_use_short_prefix() {
        let mut p = poem(BookId::Praefatio, 0);
        assert_eq!(p.line_id_prefix(), "praef");
        p.occurrence = 1;
        assert_eq!(p.id(), "praefatio-b");
        assert_eq!(p.line_id_prefix(), "praef-b");
    }

    #[test]
    fn label_uses_comma_form() {
        assert_eq!(poem(BookId::Numbered(2), 7).label(), "II, 7");
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Meter::Hendecasyllabic).unwrap(),
            "\"hendecasyllabic\""
        );
        assert_eq!(serde_json::to_string(&Preposition::In).unwrap(), "\"in\"");
        assert_eq!(Genre::Paraenesis.to_string(), "paraenesis");
    }
}
