use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while reading or rewriting a single target.
///
/// Batch processing catches these per target; only errors raised outside a
/// batch (e.g. no targets discovered at all) abort the whole run.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("path \"{0}\" not found in the document")]
    PathNotFound(String),
    #[error("{file} is missing a valid version string at path \"{path}\"")]
    InvalidVersionField { file: String, path: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
