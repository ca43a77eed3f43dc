//! Append-only persistence of extracted pairs.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::errors::{OrthopairsError, Result};
use crate::core::extract::OrthologuePair;

/// Append `pairs` to the file at `path`, one `reference<TAB>target` line each.
///
/// The file is created on first use and never truncated; repeated calls keep
/// appending, which is how the pairs from many prediction files end up in a
/// single output. The handle lives only for the duration of the call, so the
/// next file's append starts from a fresh open.
pub fn append_pairs(path: &Path, pairs: &[OrthologuePair]) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| {
            OrthopairsError::io(format!("failed to open output file '{}'", path.display()), e)
        })?;
    let mut writer = BufWriter::new(file);

    for pair in pairs {
        writeln!(writer, "{}\t{}", pair.reference, pair.target).map_err(|e| {
            OrthopairsError::io(format!("failed to write to '{}'", path.display()), e)
        })?;
    }

    writer
        .flush()
        .map_err(|e| OrthopairsError::io(format!("failed to flush '{}'", path.display()), e))
}
