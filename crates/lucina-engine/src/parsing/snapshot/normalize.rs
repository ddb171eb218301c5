use std::fmt;

use serde::Serialize;

use crate::models::{Book, Document, Poem};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub books: Vec<BookSnap>,
    pub colophon: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BookSnap {
    pub id: String,
    pub poems: Vec<PoemSnap>,
}

#[derive(Debug, Serialize)]
pub struct PoemSnap {
    pub heading: String,
    pub person: Option<String>,
    pub meter: String,
    pub genre: String,
    pub rubrics: Vec<String>,
    /// `<n>: text`, or `<n>> text` for indented lines.
    pub lines: Vec<String>,
}

pub fn normalize(doc: &Document) -> Snap {
    Snap {
        books: doc
            .front_matter
            .iter()
            .chain(doc.books.iter())
            .map(book_snap)
            .collect(),
        colophon: doc
            .colophon
            .lines()
            .map(str::to_string)
            .collect(),
    }
}

fn book_snap(book: &Book) -> BookSnap {
    BookSnap {
        id: book.id.to_string(),
        poems: book.poems.iter().map(poem_snap).collect(),
    }
}

fn poem_snap(poem: &Poem) -> PoemSnap {
    let heading = if poem.book.is_praefatio() {
        "praefatio".to_string()
    } else {
        format!(
            "{} {} {}",
            poem.label(),
            poem.preposition.as_str(),
            poem.dedicatee
        )
    };
    PoemSnap {
        heading,
        person: poem.person_ref.as_ref().map(|r| {
            let marker = if r.is_fallback() { "?" } else { "" };
            format!("{}{marker}", r.id)
        }),
        meter: poem.meter.to_string(),
        genre: poem.genre.to_string(),
        rubrics: poem.rubrics.clone(),
        lines: poem
            .lines
            .iter()
            .map(|l| {
                let sep = if l.indent { '>' } else { ':' };
                format!("{}{sep} {}", l.line_number, l.text)
            })
            .collect(),
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for book in &self.books {
            writeln!(f, "book {}", book.id)?;
            for poem in &book.poems {
                write!(f, "  poem {} [{}, {}]", poem.heading, poem.meter, poem.genre)?;
                if let Some(person) = &poem.person {
                    write!(f, " -> {person}")?;
                }
                writeln!(f)?;
                for rubric in &poem.rubrics {
                    writeln!(f, "    rubric {rubric}")?;
                }
                for line in &poem.lines {
                    writeln!(f, "    {line}")?;
                }
            }
        }
        for line in &self.colophon {
            writeln!(f, "colophon {line}")?;
        }
        Ok(())
    }
}
