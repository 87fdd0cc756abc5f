//! Fixed project-relative paths the sync operates on.

use contract_sync_common::SyncError;
use std::path::{Path, PathBuf};

/// Resolved locations of every input and output the sync touches.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    /// The contract project directory.
    pub lending_dir: PathBuf,
    /// Generated typechain bindings inside the contract project.
    pub typechain_source: PathBuf,
    /// The deployment configuration document.
    pub contracts_json: PathBuf,
    /// The frontend project directory.
    pub frontend_dir: PathBuf,
    /// Where the typechain bindings are mirrored to in the frontend.
    pub typechain_target: PathBuf,
    /// The generated deployments module in the frontend.
    pub deployments_ts: PathBuf,
}

impl ProjectLayout {
    /// Resolves the fixed layout under the given project root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let lending_dir = root.join("lending-zeta");
        let frontend_dir = root.join("frontend");
        let frontend_contracts = frontend_dir.join("src").join("contracts");

        ProjectLayout {
            typechain_source: lending_dir.join("typechain-types"),
            contracts_json: lending_dir.join("contracts.json"),
            typechain_target: frontend_contracts.join("typechain-types"),
            deployments_ts: frontend_contracts.join("deployments.ts"),
            lending_dir,
            frontend_dir,
        }
    }

    /// Checks that every required input path exists. All absent paths are
    /// collected into a single [`SyncError::MissingPaths`] so one run reports
    /// the full list. Outputs are not checked; they get created.
    pub fn validate(&self) -> Result<(), SyncError> {
        let missing: Vec<PathBuf> = [
            &self.lending_dir,
            &self.typechain_source,
            &self.contracts_json,
            &self.frontend_dir,
        ]
        .into_iter()
        .filter(|path| !path.exists())
        .cloned()
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SyncError::MissingPaths(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_fixed_relative_paths() {
        let layout = ProjectLayout::new("/project");

        assert_eq!(
            layout.contracts_json,
            PathBuf::from("/project/lending-zeta/contracts.json")
        );
        assert_eq!(
            layout.deployments_ts,
            PathBuf::from("/project/frontend/src/contracts/deployments.ts")
        );
    }

    #[test]
    fn validate_reports_every_absent_path_at_once() {
        let root = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(root.path());

        let err = layout.validate().unwrap_err();
        match err {
            SyncError::MissingPaths(missing) => {
                assert_eq!(missing.len(), 4);
                assert!(missing.contains(&layout.contracts_json));
                assert!(missing.contains(&layout.frontend_dir));
            }
            other => panic!("expected MissingPaths, got {:?}", other),
        }
    }

    #[test]
    fn validate_passes_for_a_complete_project() {
        let root = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(root.path());

        fs::create_dir_all(&layout.typechain_source).unwrap();
        fs::create_dir_all(&layout.frontend_dir).unwrap();
        fs::write(&layout.contracts_json, "{}").unwrap();

        layout.validate().unwrap();
    }
}
