pub mod book;
pub mod document;
pub mod paragraph;
pub mod person;
pub mod poem;

pub use book::{Book, BookId};
pub use document::{Document, ExpectedPoems, default_expected_poems};
pub use paragraph::Paragraph;
pub use person::{PersonRef, RefSource};
pub use poem::{Genre, Meter, Poem, Preposition, VerseLine};
