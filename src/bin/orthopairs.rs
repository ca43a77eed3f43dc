//! Orthopairs CLI - OrthoFinder prediction flattener
//!
//! This binary turns OrthoFinder's per-proteome orthologue spreadsheets into
//! a single flat file of tab-separated accession pairs for the orthology
//! benchmark service.

use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::extract_command(&cli)
}
