use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file discovered under the input root, queued for emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The path as discovered by the walker.
    pub path: PathBuf,
    /// POSIX-style path relative to the input root.
    ///
    /// This is the sort key and the string exclusion patterns match against;
    /// it is not the label shown in the output header.
    pub rel_path: String,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files emitted as fenced blocks.
    pub processed: usize,
    /// Files skipped as binary or unreadable.
    pub skipped: usize,
}
