pub mod build;
pub mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "medkg",
    about = "Compile a medical record corpus into graph bulk-import files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the corpus and write node, edge and dictionary files
    Build {
        /// JSON-lines corpus, one disease record per line
        corpus: PathBuf,
        /// Root directory for the entity/, relationship/ and name/ outputs
        /// [default: $MEDKG_DATA_DIR, then ./data]
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Write node CSV files
        #[arg(long)]
        entities: bool,
        /// Write edge CSV files
        #[arg(long)]
        relationships: bool,
        /// Write name dictionary files
        #[arg(long)]
        names: bool,
    },
    /// Extract the corpus and print entity and relationship counts
    Stats {
        /// JSON-lines corpus, one disease record per line
        corpus: PathBuf,
    },
}

/// Which exporters a build runs. Selecting none means all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub entities: bool,
    pub relationships: bool,
    pub names: bool,
}

impl Targets {
    pub const fn from_flags(entities: bool, relationships: bool, names: bool) -> Self {
        if entities || relationships || names {
            Self {
                entities,
                relationships,
                names,
            }
        } else {
            Self {
                entities: true,
                relationships: true,
                names: true,
            }
        }
    }
}
