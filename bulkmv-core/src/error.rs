use std::path::PathBuf;
use thiserror::Error;

/// Systemic enumeration failures. Per-entry problems (unreadable
/// subdirectories, permission errors) are logged and skipped instead.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The working directory does not exist.
    #[error("root path does not exist: {0}")]
    RootMissing(PathBuf),

    /// The working directory is not a directory.
    #[error("root path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
