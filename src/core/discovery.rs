//! Discovery of prediction spreadsheets under an OrthoFinder results root.
//!
//! OrthoFinder lays its pairwise predictions out as one subdirectory per
//! query proteome, each holding one `.tsv` spreadsheet per target proteome.
//! Discovery mirrors that layout exactly: one level of subdirectories, then
//! the `.tsv` files directly inside each. Nothing deeper is scanned.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::errors::{OrthopairsError, Result};

/// File extension of OrthoFinder's per-proteome prediction spreadsheets.
pub const PREDICTION_EXTENSION: &str = "tsv";

/// List the immediate subdirectories of the predictions root.
///
/// Entry order is whatever the host filesystem reports; callers must not
/// rely on a particular sequence.
pub fn species_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(OrthopairsError::config_field(
            format!(
                "predictions root '{}' does not exist or is not a directory",
                root.display()
            ),
            "predictions",
        ));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => dirs.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                warn!("skipping unreadable entry under '{}': {}", root.display(), err);
            }
        }
    }

    debug!(
        "found {} proteome directories under '{}'",
        dirs.len(),
        root.display()
    );
    Ok(dirs)
}

/// List the regular `.tsv` files directly inside one proteome directory.
///
/// An unreadable directory contributes zero files; the problem is logged and
/// the run moves on to the next directory.
pub fn prediction_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry)
                if entry.file_type().is_file() && is_prediction_file(entry.path()) =>
            {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => {
                warn!("skipping unreadable entry under '{}': {}", dir.display(), err);
            }
        }
    }
    files
}

fn is_prediction_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == PREDICTION_EXTENSION)
}
