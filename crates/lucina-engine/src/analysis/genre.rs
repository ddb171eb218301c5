use crate::models::{Genre, Preposition};

const BURIAL: &[&str] = &["sepulcr", "sepulchr"];
const DEITIES: &[&str] = &["deum", "deus", "somnum", "venerem"];
const BELOVED: &[&str] = &["lucina"];
const RULERS: &[&str] = &["galeacium", "galaecium", "sphortiam", "sphorciam"];
const READER: &[&str] = &["lectorem"];

/// Ordered genre rules; the first rule whose stems occur in the dedicatee wins.
const RULES: &[(&[&str], Genre)] = &[
    (BURIAL, Genre::Epitaph),
    (DEITIES, Genre::Prayer),
    (BELOVED, Genre::Erotic),
    (RULERS, Genre::Epideictic),
    (READER, Genre::Paraenesis),
];

/// Assigns a genre from the header's preposition and dedicatee.
///
/// An `In` header is always an invective. Otherwise the dedicatee is checked
/// for burial, deity, beloved, ruler and reader stems in that order, and
/// anything left over is an epistle.
pub fn detect_genre(preposition: Preposition, dedicatee: &str) -> Genre {
    if preposition == Preposition::In {
        return Genre::Invective;
    }
    let lower = dedicatee.to_lowercase();
    RULES
        .iter()
        .find(|(stems, _)| stems.iter().any(|s| lower.contains(s)))
        .map(|(_, genre)| *genre)
        .unwrap_or(Genre::Epistle)
}
