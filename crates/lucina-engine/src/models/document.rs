use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{
    book::{Book, BookId},
    poem::{Genre, Meter, Poem},
};
use crate::parsing::stats::ParseStats;

/// Poem count per book the collection is expected to contain.
pub type ExpectedPoems = BTreeMap<BookId, u32>;

/// Counts of the manuscript tradition: 43, 37 and 47 poems in books I-III.
pub fn default_expected_poems() -> ExpectedPoems {
    BTreeMap::from([
        (BookId::Numbered(1), 43),
        (BookId::Numbered(2), 37),
        (BookId::Numbered(3), 47),
    ])
}

/// The assembled edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The praefatio, kept apart from the numbered books.
    pub front_matter: Option<Book>,
    /// Numbered books in ascending order.
    pub books: Vec<Book>,
    /// Colophon paragraphs joined by newlines. May be empty.
    pub colophon: String,
    pub stats: ParseStats,
}

impl Document {
    pub fn book(&self, id: BookId) -> Option<&Book> {
        if id.is_praefatio() {
            return self.front_matter.as_ref();
        }
        self.books.iter().find(|b| b.id == id)
    }

    /// All poems, front matter first, in output order.
    pub fn poems(&self) -> impl Iterator<Item = &Poem> {
        self.front_matter
            .iter()
            .chain(self.books.iter())
            .flat_map(|b| b.poems.iter())
    }

    pub fn poem(&self, book: BookId, number: u32) -> Option<&Poem> {
        self.book(book)?.poems.iter().find(|p| p.number == number)
    }

    pub fn poem_count(&self) -> usize {
        self.poems().count()
    }

    pub fn line_count(&self) -> usize {
        self.poems().map(|p| p.lines.len()).sum()
    }

    /// Poem numbers listed in `expected` but absent from the document.
    ///
    /// Books without missing numbers are left out of the result.
    pub fn missing_poems(&self, expected: &ExpectedPoems) -> BTreeMap<BookId, Vec<u32>> {
        expected
            .iter()
            .filter_map(|(id, count)| {
                let found: BTreeSet<u32> = self
                    .book(*id)
                    .map(|b| b.poems.iter().map(|p| p.number).collect())
                    .unwrap_or_default();
                let missing: Vec<u32> = (1..=*count).filter(|n| !found.contains(n)).collect();
                (!missing.is_empty()).then_some((*id, missing))
            })
            .collect()
    }

    /// Poems per meter across the numbered books.
    pub fn meter_counts(&self) -> BTreeMap<Meter, usize> {
        tally(self.numbered_poems().map(|p| p.meter))
    }

    /// Poems per genre across the numbered books.
    pub fn genre_counts(&self) -> BTreeMap<Genre, usize> {
        tally(self.numbered_poems().map(|p| p.genre))
    }

    /// Poems per referenced person id across the numbered books.
    pub fn person_counts(&self) -> BTreeMap<String, usize> {
        tally(
            self.numbered_poems()
                .filter_map(|p| p.person_ref.as_ref())
                .map(|r| r.id.clone()),
        )
    }

    fn numbered_poems(&self) -> impl Iterator<Item = &Poem> {
        self.books.iter().flat_map(|b| b.poems.iter())
    }
}

fn tally<K: Ord>(keys: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
