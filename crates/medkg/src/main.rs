mod cli;

use anyhow::Result;
use clap::Parser;
use medkg_core::OutputLayout;

use crate::cli::{Cli, Commands, Targets};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medkg=info,medkg_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            corpus,
            data_dir,
            entities,
            relationships,
            names,
        } => cli::build::run(
            &corpus,
            &data_dir.map_or_else(OutputLayout::from_env, OutputLayout::new),
            Targets::from_flags(entities, relationships, names),
        ),
        Commands::Stats { corpus } => cli::stats::run(&corpus),
    }
}
