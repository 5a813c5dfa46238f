use std::path::Path;

use anyhow::{Context, Result};
use medkg_core::{EntityType, GraphExtractor, RelationType};

pub fn run(corpus: &Path) -> Result<()> {
    let graph = GraphExtractor::new()?
        .extract_file(corpus)
        .with_context(|| format!("extracting {}", corpus.display()))?;

    println!("records\t{}", graph.stats.records_extracted);
    println!("skipped\t{}", graph.stats.records_skipped);

    for entity_type in EntityType::ALL {
        println!("{entity_type}\t{}", graph.entities.count(entity_type));
    }
    for relation_type in RelationType::ALL {
        println!("{relation_type}\t{}", graph.relationships.count(relation_type));
    }

    Ok(())
}
