//! Extraction of orthologue pairs from a single OrthoFinder spreadsheet.
//!
//! Row format: orthogroup label, comma-separated reference gene tokens,
//! comma-separated target gene tokens, tab-separated. Each gene token is a
//! `|`-delimited composite (`db|ACCESSION|gene_name`) from which only the
//! accession is kept. Every reference accession of a row is paired with
//! every target accession of the same row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::core::errors::{OrthopairsError, Result};

/// Any line containing this token is treated as the header row.
///
/// The match is a substring check, kept from the upstream format: a data
/// line mentioning the token anywhere is skipped as well.
pub const HEADER_MARKER: &str = "Orthogroup";

/// One predicted orthologue pair, reference accession first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthologuePair {
    /// Accession of the gene in the reference proteome.
    pub reference: String,
    /// Accession of the gene in the target proteome.
    pub target: String,
}

/// Pairs and skip counters collected from one prediction file.
#[derive(Debug, Default)]
pub struct FileScan {
    /// Extracted pairs in file order, reference-major within each row.
    pub pairs: Vec<OrthologuePair>,
    /// Rows skipped for having fewer than three tab-separated fields.
    pub malformed_lines: usize,
    /// Gene tokens skipped for lacking a `|`-delimited accession.
    pub malformed_tokens: usize,
}

/// Read one prediction spreadsheet and collect every reference/target pair.
///
/// Malformed rows and tokens are logged, counted, and skipped; they never
/// fail the scan. Only an unreadable file does.
pub fn scan_file(path: &Path) -> Result<FileScan> {
    let file = File::open(path)
        .map_err(|e| OrthopairsError::io(format!("failed to open '{}'", path.display()), e))?;
    let reader = BufReader::new(file);

    let mut scan = FileScan::default();
    for line in reader.lines() {
        let line = line
            .map_err(|e| OrthopairsError::io(format!("failed to read '{}'", path.display()), e))?;
        scan_line(&line, path, &mut scan);
    }
    Ok(scan)
}

fn scan_line(line: &str, path: &Path, scan: &mut FileScan) {
    if line.contains(HEADER_MARKER) {
        return;
    }

    let mut fields = line.split('\t');
    let (Some(_orthogroup), Some(reference_field), Some(target_field)) =
        (fields.next(), fields.next(), fields.next())
    else {
        warn!("malformed row in '{}': '{}'", path.display(), line);
        scan.malformed_lines += 1;
        return;
    };

    let references = accessions(reference_field, path, scan);
    let targets = accessions(target_field, path, scan);

    for reference in &references {
        for target in &targets {
            scan.pairs.push(OrthologuePair {
                reference: reference.clone(),
                target: target.clone(),
            });
        }
    }
}

/// Split a comma-separated gene list and pull the accession out of each token.
///
/// A token without a second `|`-segment carries no accession and is dropped
/// with a warning; the remaining tokens of the row still produce pairs.
fn accessions(field: &str, path: &Path, scan: &mut FileScan) -> Vec<String> {
    let cleaned = field.replace(' ', "");
    cleaned
        .split(',')
        .filter_map(|token| match token.split('|').nth(1) {
            Some(accession) => Some(accession.to_string()),
            None => {
                warn!(
                    "gene token '{}' in '{}' has no '|'-delimited accession",
                    token,
                    path.display()
                );
                scan.malformed_tokens += 1;
                None
            }
        })
        .collect()
}
