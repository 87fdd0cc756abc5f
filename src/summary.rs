//! Human-readable digest of the deployment configuration, printed after a
//! successful sync. Informational only; nothing consumes this output.

use contract_sync_common::{DeploymentConfig, NetworkConfig};
use std::fmt::Write;

/// Renders the per-network digest: name, chain id, endpoints when present,
/// and the zero-address-filtered contract and token lists.
pub fn render_summary(config: &DeploymentConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sync summary");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Last updated: {}", config.deployments.last_updated);
    let _ = writeln!(out, "Deployer:     {}", config.deployments.deployer);

    for (chain_id, network) in &config.networks {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} (chain id {})", network.name, chain_id);
        render_network(&mut out, network);
    }

    out
}

fn render_network(out: &mut String, network: &NetworkConfig) {
    if let Some(rpc) = &network.rpc {
        let _ = writeln!(out, "  rpc:      {}", rpc);
    }
    if let Some(explorer) = &network.explorer {
        let _ = writeln!(out, "  explorer: {}", explorer);
    }

    let contracts = network.deployed_contracts();
    if !contracts.is_empty() {
        let _ = writeln!(out, "  deployed contracts: {}", contracts.join(", "));
    }

    let tokens = network.available_tokens();
    if !tokens.is_empty() {
        let _ = writeln!(out, "  available tokens:   {}", tokens.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeploymentConfig {
        serde_json::from_str(
            r#"{
                "networks": {
                    "7001": {
                        "name": "ZetaChain Testnet",
                        "chainId": 7001,
                        "type": "testnet",
                        "explorer": "https://athens.explorer.zetachain.com",
                        "contracts": {
                            "Gateway": "0x6c533f7fe93fae114d0954697069df33c9b74fd7",
                            "PriceOracle": "0x0000000000000000000000000000000000000000"
                        },
                        "tokens": {
                            "ZETA": "0x0",
                            "USDC.ARBI": "0x4bc32034caccc9b7e02536945edbc286bacba073"
                        }
                    }
                },
                "deployments": {
                    "lastUpdated": "2024-01-01T00:00:00Z",
                    "deployer": "0x2cd3d070ae1bd365909dd859d29f387aa96911e1"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_deployed_contracts_and_available_tokens() {
        let summary = render_summary(&sample());

        assert!(summary.contains("ZetaChain Testnet (chain id 7001)"));
        assert!(summary.contains("deployed contracts: Gateway"));
        assert!(summary.contains("available tokens:   USDC.ARBI"));
    }

    #[test]
    fn omits_zero_address_entries() {
        let summary = render_summary(&sample());

        assert!(!summary.contains("PriceOracle"));
        assert!(!summary.contains("ZETA,"));
        assert!(!summary.contains("tokens:   ZETA"));
    }

    #[test]
    fn includes_deployment_metadata_and_endpoints() {
        let summary = render_summary(&sample());

        assert!(summary.contains("Last updated: 2024-01-01T00:00:00Z"));
        assert!(summary.contains("explorer: https://athens.explorer.zetachain.com"));
        assert!(!summary.contains("rpc:"));
    }
}
