//! Run configuration for the extraction pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{OrthopairsError, Result};

/// Paths driving one extraction run.
///
/// The whole configuration of this tool is the two paths taken on the
/// command line; there is no config-file layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// OrthoFinder's `Orthologues` directory, holding one subdirectory per
    /// query proteome.
    pub predictions: PathBuf,
    /// Aggregate output file. Created if absent, appended to otherwise.
    pub out_file: PathBuf,
}

impl ExtractionConfig {
    /// Build a configuration from the predictions root and the output path.
    pub fn new(predictions: impl Into<PathBuf>, out_file: impl Into<PathBuf>) -> Self {
        Self {
            predictions: predictions.into(),
            out_file: out_file.into(),
        }
    }

    /// Check that the predictions root is an existing directory.
    pub fn validate(&self) -> Result<()> {
        if !self.predictions.is_dir() {
            return Err(OrthopairsError::config_field(
                format!(
                    "predictions root '{}' does not exist or is not a directory",
                    self.predictions.display()
                ),
                "predictions",
            ));
        }
        Ok(())
    }
}
