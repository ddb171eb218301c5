use std::{collections::BTreeMap, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    analysis::Report,
    models::{Document, Poem},
    parsing::stats::ParseStats,
};

use super::{ExportError, write_output};

/// Serializes the whole document, statistics included.
pub fn to_string_pretty(doc: &Document) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Flat view of the edition for the web front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditionExport {
    /// Poem ids in reading order.
    pub order: Vec<String>,
    /// Poems keyed by id (`praefatio`, `poem-I.1`, ...).
    pub poems: BTreeMap<String, Poem>,
    /// Person id to the ids of poems dedicated to that person.
    pub persons: BTreeMap<String, Vec<String>>,
    pub colophon: String,
    pub stats: ParseStats,
    pub analysis: Report,
}

impl EditionExport {
    pub fn from_document(doc: &Document) -> Self {
        let mut order = Vec::new();
        let mut poems = BTreeMap::new();
        let mut persons: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for poem in doc.poems() {
            let id = poem.id();
            if let Some(r) = &poem.person_ref {
                persons.entry(r.id.clone()).or_default().push(id.clone());
            }
            order.push(id.clone());
            poems.insert(id, poem.clone());
        }

        Self {
            order,
            poems,
            persons,
            colophon: doc.colophon.clone(),
            stats: doc.stats.clone(),
            analysis: Report::from_document(doc),
        }
    }

    pub fn to_string_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes the document JSON to `path`.
pub fn write_file(doc: &Document, path: &Path) -> Result<(), ExportError> {
    write_output(path, &to_string_pretty(doc)?)?;
    info!("wrote JSON to {}", path.display());
    Ok(())
}

/// Writes the flat edition export to `path`.
pub fn write_edition_file(doc: &Document, path: &Path) -> Result<(), ExportError> {
    let export = EditionExport::from_document(doc);
    write_output(path, &export.to_string_pretty()?)?;
    info!("wrote edition export to {}", path.display());
    Ok(())
}
