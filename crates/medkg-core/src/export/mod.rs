mod dictionary;
mod graph;

use std::path::PathBuf;

pub use dictionary::DictionaryExporter;
pub use graph::{
    node_header, GraphExporter, END_ID_COLUMN, ID_COLUMN, LABEL_COLUMN, START_ID_COLUMN,
    TYPE_COLUMN,
};

/// One file written by an exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub label: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

impl ExportSummary {
    #[must_use]
    pub const fn new(label: &'static str, path: PathBuf, rows: usize) -> Self {
        Self { label, path, rows }
    }
}
