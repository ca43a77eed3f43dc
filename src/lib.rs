//! # Orthopairs: OrthoFinder prediction flattener
//!
//! Converts the per-proteome orthologue spreadsheets written by OrthoFinder
//! into a single flat file of tab-separated accession pairs, the format the
//! orthology benchmark service ingests. The library walks one level of
//! subdirectories under a predictions root, scans each `.tsv` spreadsheet,
//! and appends the cross-product of reference and target accessions per row
//! to the output file.
//!
//! ## Pipeline
//!
//! ```text
//! predictions root ──▶ discovery ──▶ extract ──▶ writer ──▶ out_file
//!                      (subdirs,     (pairs per   (append,
//!                       *.tsv)        row)         one handle per file)
//! ```
//!
//! Each spreadsheet is fully scanned and written before the next one is
//! touched; nothing is buffered across files. Unreadable files and malformed
//! rows are logged and skipped, only a bad predictions root or a failed
//! append aborts a run.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use orthopairs::{core::pipeline, ExtractionConfig};
//!
//! fn main() -> orthopairs::Result<()> {
//!     let config = ExtractionConfig::new("Results/Orthologues", "pairs.txt");
//!     let summary = pipeline::run(&config)?;
//!     println!("{} pairs written", summary.pairs_written);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core extraction pipeline modules
pub mod core {
    //! Discovery, extraction, and orchestration of an extraction run.

    pub mod config;
    pub mod discovery;
    pub mod errors;
    pub mod extract;
    pub mod pipeline;
}

// Output-file handling
pub mod io {
    //! Append-only persistence of extracted pairs.

    pub mod writer;
}

// Re-export primary types for convenience
pub use core::config::ExtractionConfig;
pub use core::errors::{OrthopairsError, Result};
pub use core::extract::OrthologuePair;
pub use core::pipeline::ExtractionSummary;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
