use log::{debug, info, warn};

use crate::{
    analysis::{detect_genre, detect_meter},
    models::{BookId, Poem, PersonRef, Preposition, VerseLine},
    parsing::stats::ParseStats,
    persons::PersonResolver,
};

use super::{
    kinds::{BookMarker, PoemHeader},
    types::ParagraphClass,
};

/// Header data of the poem currently collecting verse.
#[derive(Debug)]
struct OpenPoem {
    book: BookId,
    number: u32,
    preposition: Preposition,
    dedicatee: String,
    person_ref: Option<PersonRef>,
    rubrics: Vec<String>,
}

impl OpenPoem {
    fn praefatio() -> Self {
        Self {
            book: BookId::Praefatio,
            number: 0,
            preposition: Preposition::Ad,
            dedicatee: String::new(),
            person_ref: None,
            rubrics: vec![],
        }
    }
}

/// The output of [`DocumentBuilder::finish`]: poems in input order, not yet
/// grouped into books.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub poems: Vec<Poem>,
    pub colophon: Vec<String>,
    pub stats: ParseStats,
}

/// Folds classified paragraphs into poems.
///
/// Phase 2 of document building. One builder handles one document;
/// [`DocumentBuilder::finish`] consumes it.
pub struct DocumentBuilder {
    resolver: PersonResolver,
    current_book: Option<BookId>,
    current_poem: Option<OpenPoem>,
    verse_buffer: Vec<VerseLine>,
    pending_rubric: Option<String>,
    out: BuildOutput,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::with_resolver(PersonResolver::new())
    }

    pub fn with_resolver(resolver: PersonResolver) -> Self {
        debug!("person table: {} entries", resolver.len());
        Self {
            resolver,
            current_book: None,
            current_poem: None,
            verse_buffer: vec![],
            pending_rubric: None,
            out: BuildOutput::default(),
        }
    }

    /// Book context for classifying the next paragraph.
    pub fn current_book(&self) -> Option<BookId> {
        self.current_book
    }

    pub fn push(&mut self, class: ParagraphClass) {
        self.out.stats.paragraphs += 1;
        debug!("paragraph {}: {}", self.out.stats.paragraphs, class.label());

        match class {
            ParagraphClass::Blank => self.out.stats.blank += 1,
            ParagraphClass::BookHeader(marker) => self.open_book(marker),
            ParagraphClass::PoemHeader(header) => self.open_poem(header),
            ParagraphClass::Rubric(text) => self.push_rubric(text),
            ParagraphClass::Colophon(text) => {
                self.out.stats.colophon += 1;
                self.out.colophon.push(text);
            }
            ParagraphClass::Verse { text, indent } => self.push_verse(text, indent),
        }
    }

    pub fn finish(mut self) -> BuildOutput {
        // EOF flush
        self.flush_poem();
        if let Some(rubric) = self.pending_rubric.take() {
            debug!("rubric never attached: {rubric}");
        }
        self.out
    }

    fn open_book(&mut self, marker: BookMarker) {
        self.out.stats.book_headers += 1;
        self.flush_poem();

        match marker {
            BookMarker::Edition => debug!("edition title, book unchanged"),
            BookMarker::Praefatio => {
                info!("praefatio found");
                self.current_book = Some(BookId::Praefatio);
                self.current_poem = Some(OpenPoem::praefatio());
            }
            BookMarker::Book(id) => {
                info!("book {id} found");
                self.current_book = Some(id);
            }
        }
    }

    fn open_poem(&mut self, header: PoemHeader) {
        self.out.stats.poem_headers += 1;
        self.flush_poem();

        let person_ref = self.resolver.resolve(&header.dedicatee);
        let mut rubrics = vec![];
        if let Some(rubric) = header.attached_rubric {
            self.out.stats.rubrics += 1;
            rubrics.push(rubric);
        }

        self.current_poem = Some(OpenPoem {
            book: header.book,
            number: header.number,
            preposition: header.preposition,
            dedicatee: header.dedicatee,
            person_ref,
            rubrics,
        });
    }

    fn push_rubric(&mut self, text: String) {
        self.out.stats.rubrics += 1;
        match self.current_poem.as_mut() {
            Some(poem) => poem.rubrics.push(text),
            None => {
                if let Some(old) = self.pending_rubric.replace(text) {
                    debug!("pending rubric superseded: {old}");
                    self.out.stats.superseded_rubrics += 1;
                }
            }
        }
    }

    fn push_verse(&mut self, text: String, indent: bool) {
        if self.current_poem.is_none() {
            self.out.stats.unclassified += 1;
            return;
        }
        let line_number = self.verse_buffer.len() as u32 + 1;
        self.verse_buffer.push(VerseLine {
            text,
            indent,
            line_number,
        });
    }

    /// Closes the open poem. A poem without verse is dropped; the pending
    /// rubric then waits for the next one.
    fn flush_poem(&mut self) {
        let Some(open) = self.current_poem.take() else {
            return;
        };

        if self.verse_buffer.is_empty() {
            warn!("dropping poem {}, {}: no verse lines", open.book, open.number);
            self.out.stats.dropped_poems += 1;
            return;
        }

        let mut rubrics = open.rubrics;
        if let Some(pending) = self.pending_rubric.take() {
            rubrics.insert(0, pending);
        }
        let lines = std::mem::take(&mut self.verse_buffer);
        let meter = detect_meter(&lines);
        let genre = detect_genre(open.preposition, &open.dedicatee);

        if open.person_ref.as_ref().is_some_and(PersonRef::is_fallback) {
            self.out.stats.fallback_person_refs += 1;
        }
        self.out.stats.poems += 1;
        self.out.stats.lines += lines.len();
        info!(
            "poem {}, {}: {} lines, {meter}, {genre}",
            open.book,
            open.number,
            lines.len()
        );

        self.out.poems.push(Poem {
            book: open.book,
            number: open.number,
            preposition: open.preposition,
            dedicatee: open.dedicatee,
            person_ref: open.person_ref,
            rubrics,
            lines,
            meter,
            genre,
            occurrence: 0,
        });
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
