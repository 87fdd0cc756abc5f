//! Module with common error types.

use serde_json::Error as JsonError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

/// An error in validating, loading, or syncing deployment data.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Required project paths are absent. Collected up front so that a single
    /// run reports every missing path at once instead of failing on the first.
    #[error("missing required paths: {}", format_paths(.0))]
    MissingPaths(Vec<PathBuf>),

    /// An IO error occurred while copying artifacts or writing output.
    #[error("filesystem operation failed: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing the deployment configuration.
    #[error("failed to parse deployment configuration JSON: {0}")]
    Json(#[from] JsonError),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_lists_every_path() {
        let err = SyncError::MissingPaths(vec![
            PathBuf::from("lending-zeta"),
            PathBuf::from("frontend"),
        ]);

        let message = err.to_string();
        assert!(message.contains("lending-zeta"));
        assert!(message.contains("frontend"));
    }
}
