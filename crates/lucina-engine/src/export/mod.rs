//! # Export
//!
//! Serializers for an assembled `Document`.
//!
//! - **`tei`**: TEI-XML (front praefatio, one `div` per book and poem,
//!   verse grouped into `lg` by meter, colophon in `back`)
//! - **`json`**: the document as JSON, plus the flat `EditionExport` used
//!   by the web edition

pub mod json;
pub mod tei;

use std::{fs, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes `content` to `path`, creating parent directories as needed.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
