use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::extractor::DrugDetailParser;
use super::record::MedicalRecord;
use crate::collector::{RelationshipCollector, RelationshipSet};
use crate::entity::{EntityId, EntityType};
use crate::registry::EntityRegistry;
use crate::relationship::RelationType;
use crate::{Error, Result};

/// Fields that link a disease to a list of named entities, in processing order.
/// `cure_department` and `drug_detail` have extra rules and are handled apart.
const DISEASE_LINKS: [(fn(&MedicalRecord) -> Option<&[String]>, EntityType, RelationType); 9] = [
    (|r| r.recommand_drug.as_deref(), EntityType::Drug, RelationType::RecommendDrug),
    (|r| r.recommand_eat.as_deref(), EntityType::Recipe, RelationType::RecommendRecipe),
    (|r| r.not_eat.as_deref(), EntityType::Food, RelationType::AvoidEat),
    (|r| r.do_eat.as_deref(), EntityType::Food, RelationType::AdviseEat),
    (|r| r.symptom.as_deref(), EntityType::Symptom, RelationType::HasSymptom),
    (|r| r.acompany.as_deref(), EntityType::Disease, RelationType::HasComplication),
    (|r| r.common_drug.as_deref(), EntityType::Drug, RelationType::CommonDrug),
    (|r| r.check.as_deref(), EntityType::Check, RelationType::NeedCheck),
    (|r| r.cure_department.as_deref(), EntityType::Department, RelationType::TreatDepartment),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub records_extracted: usize,
    pub records_skipped: usize,
    pub blank_lines: usize,
}

/// Final state of an extraction run, ready for export.
#[derive(Debug, Clone)]
pub struct ExtractedGraph {
    pub entities: EntityRegistry,
    pub relationships: RelationshipSet,
    pub stats: ExtractionStats,
}

/// Single-pass driver that turns medical records into entities and edges.
pub struct GraphExtractor {
    registry: EntityRegistry,
    collector: RelationshipCollector,
    drug_details: DrugDetailParser,
    stats: ExtractionStats,
}

impl GraphExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(EntityRegistry::new(), DrugDetailParser::new()?))
    }

    #[must_use]
    pub fn with_registry(registry: EntityRegistry, drug_details: DrugDetailParser) -> Self {
        Self {
            registry,
            collector: RelationshipCollector::new(),
            drug_details,
            stats: ExtractionStats::default(),
        }
    }

    /// Reads a JSON-lines corpus from disk and extracts the whole graph.
    pub fn extract_file(self, path: &Path) -> Result<ExtractedGraph> {
        let file = File::open(path).map_err(|source| Error::OpenCorpus {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Extracting triples from {}", path.display());
        self.extract(BufReader::new(file))
    }

    /// Consumes `source` line by line. A malformed line aborts the run; a
    /// record without a disease name is logged and skipped.
    pub fn extract<R: BufRead>(mut self, source: R) -> Result<ExtractedGraph> {
        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| Error::ReadCorpus {
                line: line_no,
                source,
            })?;
            self.stats.lines_read += 1;

            if line.trim().is_empty() {
                tracing::debug!(line = line_no, "Skipping blank line");
                self.stats.blank_lines += 1;
                continue;
            }

            let record = MedicalRecord::from_line(&line).map_err(|source| Error::MalformedRecord {
                line: line_no,
                source,
            })?;

            if !self.add_record(&record) {
                tracing::warn!(line = line_no, "The name of disease is not found, skipping record");
            }
        }

        Ok(self.finish())
    }

    /// Registers one record's entities and edges. Returns `false` when the
    /// record has no disease name and was skipped.
    pub fn add_record(&mut self, record: &MedicalRecord) -> bool {
        let Some(name) = record.disease_name() else {
            self.stats.records_skipped += 1;
            return false;
        };

        let disease_id = self
            .registry
            .get_or_create(EntityType::Disease, name, Some(record.disease_attributes()))
            .id;

        for (field, entity_type, relation_type) in DISEASE_LINKS {
            if let Some(names) = field(record) {
                self.link_all(disease_id, names, entity_type, relation_type);
            }
        }

        if let Some(departments) = record.cure_department.as_deref() {
            self.link_department_hierarchy(departments);
        }

        for detail in record.drug_detail.iter().flatten() {
            self.link_drug_producer(detail);
        }

        if let Some(methods) = record.cure_way.as_deref() {
            self.link_all(disease_id, methods, EntityType::Treatment, RelationType::TreatmentMethod);
        }

        self.stats.records_extracted += 1;
        true
    }

    fn link_all(
        &mut self,
        disease_id: EntityId,
        names: &[String],
        entity_type: EntityType,
        relation_type: RelationType,
    ) {
        for name in names {
            let target_id = self.registry.id_of(entity_type, name);
            self.collector.add(relation_type, disease_id, target_id);
        }
    }

    /// `[big, small]` yields `small -> big`. Any other length yields nothing.
    fn link_department_hierarchy(&mut self, departments: &[String]) {
        if let [big, small] = departments {
            let small_id = self.registry.id_of(EntityType::Department, small);
            let big_id = self.registry.id_of(EntityType::Department, big);
            self.collector.add(RelationType::BelongsTo, small_id, big_id);
        }
    }

    fn link_drug_producer(&mut self, detail: &str) {
        let Some(found) = self.drug_details.parse(detail) else {
            return;
        };
        let company_id = self.registry.id_of(EntityType::PharmCompany, &found.company);
        let drug_id = self.registry.id_of(EntityType::Drug, &found.drug);
        self.collector.add(RelationType::ProduceDrug, company_id, drug_id);
    }

    /// Deduplicates every relation list and hands over the final graph.
    #[must_use]
    pub fn finish(self) -> ExtractedGraph {
        let relationships = self.collector.finalize();

        tracing::info!(
            records = self.stats.records_extracted,
            skipped = self.stats.records_skipped,
            "Has extracted {} entities and {} relationships",
            self.registry.total(),
            relationships.total()
        );

        ExtractedGraph {
            entities: self.registry,
            relationships,
            stats: self.stats,
        }
    }
}
