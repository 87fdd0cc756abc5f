#![deny(missing_docs, unsafe_code)]

//! Common types shared between the `contract-sync` binary and the
//! `contract-sync-generate` crate: the deployment-configuration data model,
//! the document loader, and the shared error types.

pub mod deployment;
pub mod errors;
pub mod loader;

pub use crate::deployment::{
    is_native_token, is_undeployed_contract, DeploymentConfig, DeploymentInfo, NetworkConfig,
    NetworkType, TokenAddress, NATIVE_TOKEN_ADDRESS, ZERO_ADDRESS,
};
pub use crate::errors::SyncError;
pub use crate::loader::DeploymentLoader;
