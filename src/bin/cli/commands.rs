//! Command Execution Logic
//!
//! Builds the run configuration from the parsed arguments, drives the
//! extraction pipeline, and prints the end-of-run summary.

use console::style;

use orthopairs::core::pipeline;
use orthopairs::{ExtractionConfig, ExtractionSummary};

use crate::cli::args::Cli;

/// Run the extraction described by the parsed CLI arguments.
pub fn extract_command(cli: &Cli) -> anyhow::Result<()> {
    let config = ExtractionConfig::new(&cli.predictions, &cli.out_file);
    config.validate()?;

    let summary = pipeline::run(&config)?;

    if !cli.quiet {
        print_summary(&summary, &config);
    }
    Ok(())
}

/// Print the styled run recap to stdout.
fn print_summary(summary: &ExtractionSummary, config: &ExtractionConfig) {
    println!();
    println!("{}", style("Extraction complete").green().bold());
    println!("  Proteome directories: {}", summary.proteome_dirs);
    println!(
        "  Prediction files:     {} processed, {} skipped",
        summary.files_processed, summary.files_skipped
    );
    if summary.malformed_lines > 0 || summary.malformed_tokens > 0 {
        println!(
            "  Skipped input:        {} malformed rows, {} malformed gene tokens",
            summary.malformed_lines, summary.malformed_tokens
        );
    }
    println!(
        "  Pairs written:        {} -> {}",
        summary.pairs_written,
        style(config.out_file.display()).cyan()
    );
}
