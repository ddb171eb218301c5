use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Meter, genre and person-reference distribution of the numbered books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub meters: BTreeMap<String, usize>,
    pub genres: BTreeMap<String, usize>,
    /// Person id to the number of poems referring to that person.
    pub persons: BTreeMap<String, usize>,
}

impl Report {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            meters: doc
                .meter_counts()
                .into_iter()
                .map(|(m, n)| (m.to_string(), n))
                .collect(),
            genres: doc
                .genre_counts()
                .into_iter()
                .map(|(g, n)| (g.to_string(), n))
                .collect(),
            persons: doc.person_counts(),
        }
    }
}

/// Most frequent first, ties by name.
fn by_frequency(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, counts) in [
            ("meters", &self.meters),
            ("genres", &self.genres),
            ("persons", &self.persons),
        ] {
            writeln!(f, "{title}")?;
            for (name, n) in by_frequency(counts) {
                writeln!(f, "  {name:<28}{n}")?;
            }
        }
        Ok(())
    }
}
