//! The end-to-end extraction run: discover, scan, append.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::config::ExtractionConfig;
use crate::core::discovery;
use crate::core::errors::Result;
use crate::core::extract;
use crate::io::writer;

/// Counters accumulated over one extraction run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Proteome subdirectories found under the predictions root.
    pub proteome_dirs: usize,
    /// Prediction files discovered across all subdirectories.
    pub files_discovered: usize,
    /// Files fully scanned and written out.
    pub files_processed: usize,
    /// Files skipped because they could not be read.
    pub files_skipped: usize,
    /// Rows skipped for having fewer than three tab-separated fields.
    pub malformed_lines: usize,
    /// Gene tokens skipped for lacking a `|`-delimited accession.
    pub malformed_tokens: usize,
    /// Pairs appended to the output file.
    pub pairs_written: usize,
}

/// Run the full extraction described by `config`.
///
/// Each prediction file is scanned and its pairs appended to the output file
/// before the next file is touched; nothing is buffered across files. An
/// unreadable file is logged and skipped. A missing predictions root or a
/// failed append aborts the run.
pub fn run(config: &ExtractionConfig) -> Result<ExtractionSummary> {
    config.validate()?;

    let mut summary = ExtractionSummary::default();
    let dirs = discovery::species_dirs(&config.predictions)?;
    summary.proteome_dirs = dirs.len();

    for dir in &dirs {
        let files = discovery::prediction_files(dir);
        summary.files_discovered += files.len();

        for file in &files {
            debug!("scanning '{}'", file.display());
            let scan = match extract::scan_file(file) {
                Ok(scan) => scan,
                Err(err) => {
                    warn!("skipping '{}': {}", file.display(), err);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            writer::append_pairs(&config.out_file, &scan.pairs)?;
            summary.files_processed += 1;
            summary.malformed_lines += scan.malformed_lines;
            summary.malformed_tokens += scan.malformed_tokens;
            summary.pairs_written += scan.pairs.len();
        }
    }

    info!(
        "wrote {} pairs from {} of {} prediction files to '{}'",
        summary.pairs_written,
        summary.files_processed,
        summary.files_discovered,
        config.out_file.display()
    );
    Ok(summary)
}
