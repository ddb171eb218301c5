//! Person-reference resolution for dedicatees.
//!
//! Dedicatee phrases are Latin accusatives ("Cichum Simonetam", "aeternum
//! Deum"). They are matched against a table of known phrases, longest phrase
//! first, and fall back to a stopword-stripped `first-last` identifier.

use std::collections::BTreeMap;

use crate::models::PersonRef;

/// Known dedicatee phrases (lowercase, punctuation removed) and their ids.
const PERSON_TABLE: &[(&str, &str)] = &[
    // Simonetta family
    ("cichum simonetam", "cicco-simonetta"),
    ("mecoenatem cichum", "cicco-simonetta"),
    ("cichum mecoenatem", "cicco-simonetta"),
    ("ciche", "cicco-simonetta"),
    ("cichidas", "cicco-simonetta"),
    ("iohannem simonetam", "giovanni-simonetta"),
    ("iohannem iacobum simonetam", "giacomo-simonetta"),
    ("andream simonetam", "andrea-simonetta"),
    ("antonium fredericum simonetam", "antonio-federico-simonetta"),
    ("guidonem antonium simonetam", "guido-antonio-simonetta"),
    ("sigismundum simonetam", "sigismondo-simonetta"),
    ("lodovicum simonetam", "lodovico-simonetta"),
    ("iohannem franciscum simonetam", "giovanni-francesco-simonetta"),
    // Visconti family
    ("philippum vicecomitem", "filippo-visconti"),
    ("gasparem vicecomitem", "gaspare-visconti"),
    ("ambrosium vicecomitem", "ambrogio-visconti"),
    ("azonem vicecomitem", "azone-visconti"),
    ("ascanium vicecomitem", "ascanio-visconti"),
    // Men of letters
    ("franciscum philelfum", "francesco-filelfo"),
    ("laurentium stroçam", "lorenzo-strozza"),
    ("titum et laurentium stroçam", "tito-lorenzo-strozza"),
    ("baptistam plasium", "battista-piasio"),
    // Mythological and allegorical addressees
    ("lucina", "lucina"),
    ("lucinam", "lucina"),
    ("somnum", "somnus"),
    ("venerem", "venus"),
    ("cupidinem", "cupido"),
    ("laurum", "laurus"),
    ("aeternum deum", "deus"),
    // Rulers
    ("deum galeacium", "galeazzo-sforza"),
    ("deum galaecium", "galeazzo-sforza"),
    ("divum franciscum sphorciam", "francesco-sforza"),
    // Clergy
    ("iohannem sancti lamberti", "giovanni-san-lamberto"),
    ("iohannem stephanum", "giovanni-stefano"),
    ("iohannem campisium", "giovanni-campesio"),
    // Others
    ("lamiam", "lamia"),
    ("lamiam formium", "lamia-formio"),
    ("iacobum marnum", "giacomo-marno"),
    ("iacobum antiquarium", "giacomo-antiquario"),
    ("iacobum bonarellum", "giacomo-bonarelli"),
    ("lectorem", "lector"),
];

/// Titles and function words skipped when building a fallback id.
const STOPWORDS: &[&str] = &[
    "ad",
    "in",
    "comitem",
    "deum",
    "divum",
    "praesulem",
    "episcopum",
    "sancti",
    "de",
    "pro",
];

/// Resolves dedicatee phrases to person ids.
#[derive(Debug, Clone)]
pub struct PersonResolver {
    /// (phrase, id), longest phrase first.
    entries: Vec<(String, String)>,
}

impl PersonResolver {
    /// Resolver over the built-in table.
    pub fn new() -> Self {
        Self::with_extra(&BTreeMap::new())
    }

    /// Resolver over the built-in table plus `extra` phrase → id entries.
    ///
    /// Extra phrases are normalized like dedicatees and override built-in
    /// entries with the same phrase.
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        let mut merged: BTreeMap<String, String> = PERSON_TABLE
            .iter()
            .map(|(phrase, id)| (phrase.to_string(), id.to_string()))
            .collect();
        for (phrase, id) in extra {
            let key = normalize(phrase);
            if !key.is_empty() {
                merged.insert(key, id.clone());
            }
        }

        let mut entries: Vec<(String, String)> = merged.into_iter().collect();
        // Longest first; ties broken alphabetically so lookup order is stable.
        entries.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { entries }
    }

    /// Resolves a dedicatee phrase. Returns `None` when nothing usable remains.
    pub fn resolve(&self, dedicatee: &str) -> Option<PersonRef> {
        let clean = normalize(dedicatee);
        if clean.is_empty() {
            return None;
        }

        if let Some((_, id)) = self
            .entries
            .iter()
            .find(|(phrase, _)| clean.contains(phrase.as_str()))
        {
            return Some(PersonRef::table(id.clone()));
        }

        let words: Vec<&str> = clean
            .split_whitespace()
            .filter(|w| !STOPWORDS.contains(w))
            .collect();
        match words.as_slice() {
            [] => None,
            [only] => Some(PersonRef::fallback(*only)),
            [first, .., last] => Some(PersonRef::fallback(format!("{first}-{last}"))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PersonResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases, drops punctuation and collapses whitespace.
fn normalize(s: &str) -> String {
    let kept: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
