use csv::Writer;

use super::ExportSummary;
use crate::collector::RelationshipSet;
use crate::config::{ensure_dir, OutputLayout};
use crate::entity::EntityType;
use crate::registry::EntityRegistry;
use crate::relationship::RelationType;
use crate::Result;

pub const ID_COLUMN: &str = "id:ID";
pub const LABEL_COLUMN: &str = ":LABEL";
pub const START_ID_COLUMN: &str = ":START_ID";
pub const END_ID_COLUMN: &str = ":END_ID";
pub const TYPE_COLUMN: &str = ":TYPE";

/// Writes node and edge CSV files in the graph bulk-import column layout.
pub struct GraphExporter<'a> {
    entities: &'a EntityRegistry,
    relationships: &'a RelationshipSet,
    layout: &'a OutputLayout,
}

impl<'a> GraphExporter<'a> {
    #[must_use]
    pub const fn new(
        entities: &'a EntityRegistry,
        relationships: &'a RelationshipSet,
        layout: &'a OutputLayout,
    ) -> Self {
        Self {
            entities,
            relationships,
            layout,
        }
    }

    /// One `<type>.csv` per entity type under the entity directory.
    pub fn export_entities(&self) -> Result<Vec<ExportSummary>> {
        ensure_dir(&self.layout.entity_dir())?;

        EntityType::ALL
            .into_iter()
            .map(|entity_type| self.export_nodes(entity_type))
            .collect()
    }

    /// One `<kind>.csv` per relation kind under the relationship directory.
    pub fn export_relationships(&self) -> Result<Vec<ExportSummary>> {
        ensure_dir(&self.layout.relationship_dir())?;

        RelationType::ALL
            .into_iter()
            .map(|relation_type| self.export_edges(relation_type))
            .collect()
    }

    fn export_nodes(&self, entity_type: EntityType) -> Result<ExportSummary> {
        let path = self.layout.node_file(entity_type);
        let count = self.entities.count(entity_type);
        tracing::info!(path = %path.display(), "Exporting {count} {entity_type} entities");

        let mut writer = Writer::from_path(&path)?;
        writer.write_record(node_header(entity_type))?;

        for entity in self.entities.entities(entity_type) {
            let id = entity.id.to_string();
            let mut row = Vec::with_capacity(entity_type.attribute_columns().len() + 3);
            row.push(entity.name.as_str());
            row.extend(entity.attribute_values().into_iter().map(Option::unwrap_or_default));
            row.push(&id);
            row.push(entity_type.as_str());
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(ExportSummary::new(entity_type.as_str(), path, count))
    }

    fn export_edges(&self, relation_type: RelationType) -> Result<ExportSummary> {
        let path = self.layout.edge_file(relation_type);
        let edges = self.relationships.edges(relation_type);
        tracing::info!(
            path = %path.display(),
            "Exporting {} relationship ({}, {}, {})",
            edges.len(),
            relation_type,
            relation_type.source_type(),
            relation_type.target_type()
        );

        let mut writer = Writer::from_path(&path)?;
        writer.write_record([START_ID_COLUMN, END_ID_COLUMN, TYPE_COLUMN])?;

        for edge in edges {
            writer.write_record([
                edge.source_id.to_string().as_str(),
                edge.target_id.to_string().as_str(),
                relation_type.as_str(),
            ])?;
        }
        writer.flush()?;

        Ok(ExportSummary::new(relation_type.as_str(), path, edges.len()))
    }
}

/// `name`, the type's attribute columns, `id:ID`, `:LABEL`.
#[must_use]
pub fn node_header(entity_type: EntityType) -> Vec<&'static str> {
    let mut header = vec!["name"];
    header.extend_from_slice(entity_type.attribute_columns());
    header.push(ID_COLUMN);
    header.push(LABEL_COLUMN);
    header
}
