pub mod analysis;
pub mod export;
pub mod io;
pub mod models;
pub mod parsing;
pub mod persons;

// Re-export key types for easier usage
pub use analysis::Report;
pub use export::{ExportError, json::EditionExport, tei::TeiOptions};
pub use io::{ReadError, read_paragraphs};
pub use models::*;
pub use parsing::{parse_paragraphs, parse_paragraphs_with, stats::ParseStats};
pub use persons::PersonResolver;
