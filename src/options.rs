use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Strategy used to decide whether a file is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A null byte in the first 8KB marks the file binary.
    Simple,
    /// Content inspection over the first 8KB.
    Accurate,
    /// Never classify as binary.
    None,
}

/// The default header separator: 30 underscores.
pub fn default_separator() -> String {
    "_".repeat(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FencecatOptions {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub separator: String,
    pub exclude_patterns: Vec<String>,
    pub use_gitignore: bool,
    pub binary_detection: BinaryDetection,
}

#[derive(Debug)]
pub struct FencecatBuilder {
    options: FencecatOptions,
}
impl FencecatBuilder {
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            options: FencecatOptions {
                input_dir: input_dir.into(),
                output_file: output_file.into(),
                separator: default_separator(),
                exclude_patterns: Vec::new(),
                use_gitignore: false,
                binary_detection: BinaryDetection::Simple,
            },
        }
    }
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn use_gitignore(mut self, yes: bool) -> Self {
        self.options.use_gitignore = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> FencecatOptions {
        self.options
    }
}
