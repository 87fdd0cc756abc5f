//! Tools for loading the deployment configuration document.
//!
//! The document is loaded as a raw [`Value`] first (with key order
//! preserved) so that the generator can serialize it back out without
//! reordering; [`DeploymentLoader::parse_config`] turns a loaded document
//! into the typed model for examination.

use crate::deployment::DeploymentConfig;
use crate::errors::SyncError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads deployment configuration documents.
pub struct DeploymentLoader;

impl DeploymentLoader {
    /// Loads a document from a string of JSON text.
    pub fn load_from_str(json: &str) -> Result<Value, SyncError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a document from bytes of JSON text.
    pub fn load_from_slice(json: &[u8]) -> Result<Value, SyncError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Loads a document from a reader of JSON text.
    pub fn load_from_reader(json: impl Read) -> Result<Value, SyncError> {
        Ok(serde_json::from_reader(json)?)
    }

    /// Loads a document from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Value, SyncError> {
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    /// Parses a loaded document into the typed deployment model.
    pub fn parse_config(document: Value) -> Result<DeploymentConfig, SyncError> {
        Ok(serde_json::from_value(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_preserves_key_order() {
        let document =
            DeploymentLoader::load_from_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();

        let keys: Vec<_> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DeploymentLoader::load_from_str("{not json").unwrap_err();
        assert!(matches!(err, SyncError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DeploymentLoader::load_from_file("/nonexistent/contracts.json").unwrap_err();
        assert!(matches!(err, SyncError::Io(_)));
    }
}
