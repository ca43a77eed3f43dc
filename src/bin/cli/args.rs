//! CLI Argument Structures
//!
//! This module contains the argument definitions for the orthopairs binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flatten OrthoFinder orthologue predictions into benchmark-ready pairs
#[derive(Parser)]
#[command(name = "orthopairs")]
#[command(version = VERSION)]
#[command(about = "Flatten OrthoFinder orthologue predictions into benchmark-ready accession pairs")]
#[command(long_about = "
Walk OrthoFinder's 'Orthologues' directory (one subdirectory per query
proteome, each holding .tsv prediction spreadsheets) and append every
reference/target accession pair to a single output file, one tab-separated
pair per line.

Typical usage:

  orthopairs --predictions /path/to/Results_XXXXX/Orthologues \\
             --out_file /path/to/pairs.txt

The output file is appended to, never truncated, so successive runs against
different prediction sets can share one output file.
")]
pub struct Cli {
    /// Path to OrthoFinder's 'Orthologues' directory
    #[arg(long, value_name = "DIR")]
    pub predictions: PathBuf,

    /// Output file for the extracted accession pairs (appended, never truncated)
    #[arg(long = "out_file", value_name = "FILE")]
    pub out_file: PathBuf,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the end-of-run summary
    #[arg(short, long)]
    pub quiet: bool,
}
