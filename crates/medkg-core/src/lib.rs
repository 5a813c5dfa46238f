#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod collector;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod ingest;
pub mod registry;
pub mod relationship;

pub use collector::{RelationshipCollector, RelationshipSet};
pub use config::OutputLayout;
pub use entity::{DiseaseAttributes, Entity, EntityId, EntityType};
pub use error::{Error, Result};
pub use export::{DictionaryExporter, ExportSummary, GraphExporter};
pub use ingest::{
    DrugDetailParser, DrugProducer, ExtractedGraph, ExtractionStats, GraphExtractor,
    MedicalRecord,
};
pub use registry::{EntityRegistry, IdAllocator};
pub use relationship::{RelationType, Relationship};
