//! Loader error types.

use std::path::PathBuf;

/// Errors that stop a data file from being loaded at all.
///
/// Individual bad lines are not errors; they are skipped and logged.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
