use std::{fs, path::Path};

use super::ReadError;
use crate::models::Paragraph;

/// Reads a UTF-8 text file, one paragraph per line.
pub fn read_paragraphs(path: &Path) -> Result<Vec<Paragraph>, ReadError> {
    let content = fs::read_to_string(path)?;
    Ok(paragraphs_from_str(&content))
}

/// One paragraph per line. Leading whitespace is kept so indentation still
/// marks verse; there are no style hints.
pub fn paragraphs_from_str(s: &str) -> Vec<Paragraph> {
    let s = s.strip_prefix('\u{feff}').unwrap_or(s);
    s.lines().map(Paragraph::new).collect()
}
