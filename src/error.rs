use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FencecatError {
    #[error("{0}")]
    Config(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("Failed to load ignore patterns from {path}: {source}")]
    Gitignore {
        path: PathBuf,
        source: ignore::Error,
    },
}
impl FencecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FencecatError::Io {
            path: path.into(),
            source,
        }
    }
}
