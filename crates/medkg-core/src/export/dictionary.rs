use std::fs::File;
use std::io::{BufWriter, Write};

use super::ExportSummary;
use crate::config::{ensure_dir, OutputLayout};
use crate::entity::EntityType;
use crate::registry::EntityRegistry;
use crate::Result;

/// Writes each entity type's names to a newline-delimited text file, in
/// first-registration order. Only needs the registry, not the relations.
pub struct DictionaryExporter<'a> {
    entities: &'a EntityRegistry,
    layout: &'a OutputLayout,
}

impl<'a> DictionaryExporter<'a> {
    #[must_use]
    pub const fn new(entities: &'a EntityRegistry, layout: &'a OutputLayout) -> Self {
        Self { entities, layout }
    }

    pub fn export_as_dictionary(&self) -> Result<Vec<ExportSummary>> {
        ensure_dir(&self.layout.name_dir())?;

        EntityType::ALL
            .into_iter()
            .map(|entity_type| self.export_names(entity_type))
            .collect()
    }

    fn export_names(&self, entity_type: EntityType) -> Result<ExportSummary> {
        let path = self.layout.dictionary_file(entity_type);
        let mut out = BufWriter::new(File::create(&path)?);

        for name in self.entities.names(entity_type) {
            writeln!(out, "{name}")?;
        }
        out.flush()?;

        let count = self.entities.count(entity_type);
        tracing::debug!(path = %path.display(), "Wrote {count} {entity_type} names");
        Ok(ExportSummary::new(entity_type.as_str(), path, count))
    }
}
