mod extractor;
mod pipeline;
mod record;

pub use extractor::{DrugDetailParser, DrugProducer};
pub use pipeline::{ExtractedGraph, ExtractionStats, GraphExtractor};
pub use record::MedicalRecord;
