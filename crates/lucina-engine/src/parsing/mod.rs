pub mod assemble;
pub mod paragraphs;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::{
    models::{Document, Paragraph},
    persons::PersonResolver,
};

use assemble::assemble;
use paragraphs::{DocumentBuilder, ParagraphClassifier};

/// Builds a document from a paragraph stream with the built-in person table.
pub fn parse_paragraphs<'a>(paragraphs: impl IntoIterator<Item = &'a Paragraph>) -> Document {
    parse_paragraphs_with(PersonResolver::new(), paragraphs)
}

/// Builds a document from a paragraph stream, resolving dedicatees with
/// `resolver`.
pub fn parse_paragraphs_with<'a>(
    resolver: PersonResolver,
    paragraphs: impl IntoIterator<Item = &'a Paragraph>,
) -> Document {
    let classifier = ParagraphClassifier;
    let mut builder = DocumentBuilder::with_resolver(resolver);

    for p in paragraphs {
        let class = classifier.classify(p, builder.current_book());
        builder.push(class);
    }

    assemble(builder.finish())
}
