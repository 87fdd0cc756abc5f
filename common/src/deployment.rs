//! Module for reading and examining the deployment configuration produced by
//! the contract deployment scripts (`contracts.json`).
//!
//! Key order in every mapping is significant: it is the insertion order of
//! the source document and must survive into the generated TypeScript, so
//! all mappings use [`IndexMap`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The zero address marking a contract as not deployed.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// The short zero address marking a token as a native (non-contract) asset.
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0";

/// The root deployment configuration document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Per-network deployment data, keyed by chain id string.
    pub networks: IndexMap<String, NetworkConfig>,
    /// Metadata about the last deployment run.
    pub deployments: DeploymentInfo,
}

/// Metadata about the last deployment run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeploymentInfo {
    /// When the configuration was last regenerated, as an ISO-8601 string.
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    /// Address of the account that performed the deployment.
    pub deployer: String,
}

/// A single network's deployment configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Human-readable network name.
    pub name: String,
    /// The chain id.
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    /// Whether this is a test or production chain.
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    /// RPC endpoint, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc: Option<String>,
    /// Block explorer URL, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
    /// Contract addresses by contract name.
    pub contracts: IndexMap<String, String>,
    /// Token addresses by token symbol.
    pub tokens: IndexMap<String, TokenAddress>,
}

/// Whether a network is a test or production chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// A test chain.
    Testnet,
    /// A production chain.
    Mainnet,
}

/// A token address entry.
///
/// Two historical shapes of `contracts.json` are in circulation: newer
/// documents store a bare address string per symbol, older ones store an
/// object with an `address` field and assorted extra metadata. Both parse;
/// the generator's flatten pass converges them on the bare string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenAddress {
    /// The current shape: a bare address string.
    Plain(String),
    /// The legacy shape: an object carrying the address and extra metadata.
    Detailed {
        /// The token address.
        address: String,
        /// Remaining fields of the legacy entry, carried along untouched.
        #[serde(flatten)]
        extra: IndexMap<String, Value>,
    },
}

impl TokenAddress {
    /// The bare address, regardless of which historical shape the entry uses.
    pub fn address(&self) -> &str {
        match self {
            TokenAddress::Plain(address) => address,
            TokenAddress::Detailed { address, .. } => address,
        }
    }
}

/// Returns `true` when `address` marks a contract as not deployed. Contracts
/// use the full 40-digit zero address as their sentinel.
pub fn is_undeployed_contract(address: &str) -> bool {
    address.is_empty() || address == ZERO_ADDRESS
}

/// Returns `true` when `address` marks a token as a native (non-contract)
/// asset. Tokens use the short `0x0` form as their sentinel, distinct from
/// the contract one.
pub fn is_native_token(address: &str) -> bool {
    address.is_empty() || address == NATIVE_TOKEN_ADDRESS
}

impl NetworkConfig {
    /// Names of contracts with a real deployed address, in document order.
    pub fn deployed_contracts(&self) -> Vec<&str> {
        self.contracts
            .iter()
            .filter(|(_, address)| !is_undeployed_contract(address))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Symbols of tokens with a real address, in document order. Tokens at
    /// the native-asset sentinel are excluded here.
    pub fn available_tokens(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|(_, entry)| !is_native_token(entry.address()))
            .map(|(symbol, _)| symbol.as_str())
            .collect()
    }
}
