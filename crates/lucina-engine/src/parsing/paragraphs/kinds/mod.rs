pub mod book_header;
pub mod colophon;
pub mod poem_header;
pub mod rubric;
pub mod verse;

pub use book_header::{BookHeader, BookMarker};
pub use colophon::Colophon;
pub use poem_header::PoemHeader;
pub use rubric::Rubric;
pub use verse::Verse;
