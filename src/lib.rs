//! # Fencecat
//!
//! `fencecat` recursively concatenates the text files of a directory tree into a
//! single output document, wrapping each file in a labeled, syntax-highlighted
//! code fence. Binary files (and anything matching the exclusion rules) are
//! skipped, and the run ends with processed/skipped counts.
//!
//! # Features
//!
//! - `gitignore` (default): honor a `.gitignore` file found directly under the
//!   input directory. Builds without this feature reject the option at runtime.
//! - `logging`: debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use fencecat::{FencecatBuilder, BinaryDetection, fencecat};
//!
//! let options = FencecatBuilder::new("src", "concatenated.md")
//!     .use_gitignore(true)
//!     .exclude_patterns(vec!["*.lock".into()])
//!     .binary_detection(BinaryDetection::Simple)
//!     .build();
//!
//! let summary = fencecat(options).expect("Failed to concatenate directory");
//! println!("Processed {} files, skipped {}", summary.processed, summary.skipped);
//! ```

mod emit;
mod engine;
mod error;
mod filter;
mod options;
mod types;

pub use engine::fencecat;
pub use error::FencecatError;
pub use options::{BinaryDetection, FencecatBuilder, FencecatOptions, default_separator};
pub use types::{Candidate, RunSummary};
