//! Assembly of the generated `deployments.ts` module text.

use crate::literal::to_object_literal;
use crate::ModuleBuilder;
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use contract_sync_common::{NATIVE_TOKEN_ADDRESS, ZERO_ADDRESS};
use inflector::Inflector;
use serde_json::Value;
use std::fmt::Write;

/// Collapses legacy `{ address: X, ... }` token entries to the bare address
/// string `X`; entries that are already strings are left unchanged.
///
/// Only the `tokens` mapping of each network is touched, one level deep;
/// `contracts` and network metadata stay as they are. Applying the pass
/// twice yields the same document as applying it once.
pub fn flatten_token_addresses(document: &mut Value) {
    let networks = match document.get_mut("networks").and_then(Value::as_object_mut) {
        Some(networks) => networks,
        None => return,
    };

    for network in networks.values_mut() {
        let tokens = match network.get_mut("tokens").and_then(Value::as_object_mut) {
            Some(tokens) => tokens,
            None => continue,
        };

        for entry in tokens.values_mut() {
            if let Some(address) = entry.get("address").and_then(Value::as_str) {
                *entry = Value::String(address.to_string());
            }
        }
    }
}

pub(crate) fn expand(document: &Value, builder: &ModuleBuilder) -> Result<String> {
    let mut document = document.clone();
    flatten_token_addresses(&mut document);

    let generated_at = match &builder.generated_at {
        Some(timestamp) => timestamp.clone(),
        None => Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    let mut out = String::new();
    writeln!(
        out,
        "// THIS FILE IS AUTO-GENERATED BY contract-sync. DO NOT EDIT."
    )?;
    writeln!(
        out,
        "// Contract deployment data converted from contracts.json."
    )?;
    writeln!(out, "// Generated: {}", generated_at)?;
    writeln!(out)?;

    if builder.helpers {
        writeln!(out, "import {{ isTestnetMode }} from '../config/wagmi';")?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "export const {} = {};",
        builder.const_name,
        to_object_literal(&document)
    )?;

    if builder.helpers {
        writeln!(out)?;
        let helpers = HELPERS
            .replace("@DATA@", &builder.const_name)
            .replace("@ZERO_ADDRESS@", ZERO_ADDRESS)
            .replace("@NATIVE_TOKEN_ADDRESS@", NATIVE_TOKEN_ADDRESS);
        out.push_str(&helpers);
        out.push_str(&derived_section(&document));
    }

    Ok(out)
}

/// Fixed accessor boilerplate the frontend imports from `deployments.ts`.
/// `@DATA@` is substituted with the name of the exported data constant, and
/// the address placeholders with the shared sentinel values.
const HELPERS: &str = r#"// Type definitions matching the deployment utils
export interface NetworkConfig {
  name: string;
  chainId: number;
  type: 'testnet' | 'mainnet';
  rpc?: string;
  explorer?: string;
  contracts: {
    [contractName: string]: string;
  };
  tokens: {
    [tokenSymbol: string]: string;
  };
}

export interface DeploymentConfig {
  networks: {
    [chainId: string]: NetworkConfig;
  };
  deployments: {
    lastUpdated: string;
    deployer: string;
  };
}

// Cast the generated data to our type
const deployments: DeploymentConfig = @DATA@ as DeploymentConfig;

const ZERO_ADDRESS = '@ZERO_ADDRESS@';
const NATIVE_TOKEN_ADDRESS = '@NATIVE_TOKEN_ADDRESS@';

/**
 * Get available networks based on current environment
 */
export function getAvailableNetworks(): NetworkConfig[] {
  return Object.values(deployments.networks).filter(network => {
    return isTestnetMode ? network.type === 'testnet' : network.type === 'mainnet';
  });
}

/**
 * Get network configuration by chain ID
 */
export function getNetworkConfig(chainId: number): NetworkConfig | null {
  const network = deployments.networks[chainId.toString()];
  if (!network) {
    return null;
  }
  if (isTestnetMode && network.type !== 'testnet') {
    return null;
  }
  if (!isTestnetMode && network.type !== 'mainnet') {
    return null;
  }
  return network;
}

/**
 * Get contract address by name and chain ID
 */
export function getContractAddress(contractName: string, chainId: number): string | null {
  const address = getNetworkConfig(chainId)?.contracts[contractName];
  if (!address || address === ZERO_ADDRESS) {
    return null;
  }
  return address;
}

/**
 * Get token address by symbol and chain ID
 */
export function getTokenAddress(tokenSymbol: string, chainId: number): string | null {
  const address = getNetworkConfig(chainId)?.tokens[tokenSymbol];
  if (!address || address === NATIVE_TOKEN_ADDRESS) {
    return null;
  }
  return address;
}

/**
 * Get all deployed contract addresses for a chain
 */
export function getAllContracts(chainId: number): Record<string, string> | null {
  const network = getNetworkConfig(chainId);
  if (!network) {
    return null;
  }
  const valid: Record<string, string> = {};
  for (const [name, address] of Object.entries(network.contracts)) {
    if (address && address !== ZERO_ADDRESS) {
      valid[name] = address;
    }
  }
  return valid;
}

/**
 * Get all token addresses for a chain
 */
export function getAllTokens(chainId: number): Record<string, string> | null {
  const network = getNetworkConfig(chainId);
  if (!network) {
    return null;
  }
  const valid: Record<string, string> = {};
  for (const [symbol, address] of Object.entries(network.tokens)) {
    if (address && address !== NATIVE_TOKEN_ADDRESS) {
      valid[symbol] = address;
    }
  }
  return valid;
}

/**
 * Check if a contract is deployed on a specific chain
 */
export function isContractDeployed(contractName: string, chainId: number): boolean {
  return getContractAddress(contractName, chainId) !== null;
}

/**
 * Check if a token is available on a specific chain
 */
export function isTokenAvailable(tokenSymbol: string, chainId: number): boolean {
  return getTokenAddress(tokenSymbol, chainId) !== null;
}

/**
 * Get deployment info
 */
export function getDeploymentInfo() {
  return deployments.deployments;
}

/**
 * Get supported chain IDs for current environment
 */
export function getSupportedChainIds(): number[] {
  return getAvailableNetworks().map(network => network.chainId);
}
"#;

/// Emits the document-derived tail of the module: the `SupportedChain`
/// table with its type guard, the `CONTRACT_NAMES` and `TOKEN_SYMBOLS`
/// tables, and the named accessor shortcuts. All of it comes from the names
/// actually present in the document rather than from hardcoded lists.
fn derived_section(document: &Value) -> String {
    let mut contracts: Vec<&str> = Vec::new();
    let mut tokens: Vec<&str> = Vec::new();
    let mut chains: Vec<(String, String)> = Vec::new();

    if let Some(networks) = document.get("networks").and_then(Value::as_object) {
        for network in networks.values() {
            collect_keys(network.get("contracts"), &mut contracts);
            collect_keys(network.get("tokens"), &mut tokens);
            collect_chain(network, &mut chains);
        }
    }

    let mut out = String::new();
    out.push_str(&supported_chains(&chains));
    out.push_str("\n// Predefined contract and token names for type safety\n");
    out.push_str(&name_table("CONTRACT_NAMES", &contracts));
    out.push('\n');
    out.push_str(&name_table("TOKEN_SYMBOLS", &tokens));
    out.push_str(&accessor_shortcuts(
        "// Helper functions with predefined contract names",
        "getContractAddress",
        "CONTRACT_NAMES",
        &contracts,
    ));
    out.push_str(&accessor_shortcuts(
        "// Helper functions for tokens",
        "getTokenAddress",
        "TOKEN_SYMBOLS",
        &tokens,
    ));
    out
}

fn collect_keys<'a>(mapping: Option<&'a Value>, into: &mut Vec<&'a str>) {
    if let Some(entries) = mapping.and_then(Value::as_object) {
        for key in entries.keys() {
            if !into.contains(&key.as_str()) {
                into.push(key);
            }
        }
    }
}

/// Records a network's `(constant key, chain id)` pair for the
/// `SupportedChain` table. Networks without a name or a numeric chain id
/// have no derivable key and are skipped.
fn collect_chain(network: &Value, into: &mut Vec<(String, String)>) {
    let name = match network.get("name").and_then(Value::as_str) {
        Some(name) => name,
        None => return,
    };
    let chain_id = match network.get("chainId") {
        Some(Value::Number(chain_id)) => chain_id.to_string(),
        _ => return,
    };

    let key = constant_name(name);
    if !into.iter().any(|(existing, _)| *existing == key) {
        into.push((key, chain_id));
    }
}

fn supported_chains(chains: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str("\n// Supported chain constants for type safety\n");
    out.push_str("export const SupportedChain = {\n");
    for (key, chain_id) in chains {
        out.push_str(&format!("  {}: {},\n", key, chain_id));
    }
    out.push_str("} as const;\n\n");
    out.push_str(
        "export type SupportedChainId = typeof SupportedChain[keyof typeof SupportedChain];\n\n",
    );
    out.push_str("// Helper to check if a chain ID is supported\n");
    out.push_str(
        "export const isSupportedChain = (chainId: number): chainId is SupportedChainId => {\n",
    );
    out.push_str("  return Object.values(SupportedChain).includes(chainId as SupportedChainId);\n");
    out.push_str("};\n");
    out
}

/// One arrow-function shortcut per collected name, delegating to the
/// generic getter via the corresponding name table.
fn accessor_shortcuts(heading: &str, getter: &str, table: &str, names: &[&str]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for name in names {
        let key = constant_name(name);
        out.push_str(&format!(
            "export const get{}Address = (chainId: number) =>\n  {}({}.{}, chainId);\n\n",
            key.to_pascal_case(),
            getter,
            table,
            key,
        ));
    }
    out
}

fn name_table(table: &str, names: &[&str]) -> String {
    let mut out = format!("export const {} = {{\n", table);
    for name in names {
        out.push_str(&format!("  {}: '{}',\n", constant_name(name), name));
    }
    out.push_str("} as const;\n");
    out
}

/// `SimpleLendingProtocol` becomes `SIMPLE_LENDING_PROTOCOL`; already-upper
/// symbols like `USDC.ARBI` only get their punctuation mapped to `_`.
fn constant_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if sanitized.chars().any(|c| c.is_ascii_lowercase()) {
        sanitized.to_screaming_snake_case()
    } else {
        sanitized
    }
}
