//! # Paragraph Readers
//!
//! Turn source files into the flat `Paragraph` stream the builder consumes.
//!
//! - **`docx`**: Word documents (`word/document.xml` inside the ZIP
//!   container), with italic/underline/indent hints
//! - **`text`**: plain text, one paragraph per line

pub mod docx;
pub mod text;

use std::path::{Path, PathBuf};

use crate::models::Paragraph;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("No word/document.xml in archive")]
    MissingDocument,
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Reads paragraphs from `path`, choosing the reader by extension:
/// `.docx` is read as a Word document, anything else as plain text.
pub fn read_paragraphs(path: &Path) -> Result<Vec<Paragraph>, ReadError> {
    if !path.exists() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }

    if is_docx(path) {
        docx::read_paragraphs(path)
    } else {
        text::read_paragraphs(path)
    }
}

fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}
