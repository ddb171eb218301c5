use std::collections::BTreeMap;

use log::warn;

use crate::models::{Book, BookId, Document, Poem};

use super::paragraphs::BuildOutput;

/// Groups poems into books and sorts them.
///
/// Poems within a book are ordered by number (stable, so duplicates keep
/// input order) and repeated numbers get increasing `occurrence` values.
/// The praefatio becomes front matter; numbered books follow in ascending
/// order.
pub fn assemble(output: BuildOutput) -> Document {
    let mut grouped: BTreeMap<BookId, Vec<Poem>> = BTreeMap::new();
    for poem in output.poems {
        grouped.entry(poem.book).or_default().push(poem);
    }

    let mut front_matter = None;
    let mut books = Vec::with_capacity(grouped.len());
    for (id, mut poems) in grouped {
        poems.sort_by_key(|p| p.number);
        number_occurrences(&mut poems);
        let book = Book { id, poems };
        if id.is_praefatio() {
            front_matter = Some(book);
        } else {
            books.push(book);
        }
    }

    Document {
        front_matter,
        books,
        colophon: output.colophon.join("\n"),
        stats: output.stats,
    }
}

/// Poems must already be sorted by number.
fn number_occurrences(poems: &mut [Poem]) {
    let mut previous = None;
    let mut occurrence = 0;
    for poem in poems {
        occurrence = match previous {
            Some(n) if n == poem.number => occurrence + 1,
            _ => 0,
        };
        poem.occurrence = occurrence;
        if occurrence > 0 {
            warn!("repeated poem number {}: stored as {}", poem.label(), poem.id());
        }
        previous = Some(poem.number);
    }
}
