use std::path::Path;

use anyhow::{Context, Result};
use medkg_core::{DictionaryExporter, ExportSummary, GraphExporter, GraphExtractor, OutputLayout};

use super::Targets;

pub fn run(corpus: &Path, layout: &OutputLayout, targets: Targets) -> Result<()> {
    let graph = GraphExtractor::new()?
        .extract_file(corpus)
        .with_context(|| format!("extracting {}", corpus.display()))?;

    tracing::info!(data_dir = %layout.data_dir.display(), ?targets, "Exporting graph");
    let exporter = GraphExporter::new(&graph.entities, &graph.relationships, layout);

    if targets.entities {
        let files = exporter.export_entities()?;
        report("node", &layout.entity_dir(), &files);
    }
    if targets.relationships {
        let files = exporter.export_relationships()?;
        report("edge", &layout.relationship_dir(), &files);
    }
    if targets.names {
        let files = DictionaryExporter::new(&graph.entities, layout).export_as_dictionary()?;
        report("dictionary", &layout.name_dir(), &files);
    }

    eprintln!(
        "Extracted {} entities and {} relationships from {} records ({} skipped)",
        graph.entities.total(),
        graph.relationships.total(),
        graph.stats.records_extracted,
        graph.stats.records_skipped
    );

    Ok(())
}

fn report(kind: &str, dir: &Path, files: &[ExportSummary]) {
    eprintln!("Wrote {} {kind} files to {}", files.len(), dir.display());
    for file in files {
        eprintln!("  {:<16} {:>7} rows  {}", file.label, file.rows, file.path.display());
    }
}
