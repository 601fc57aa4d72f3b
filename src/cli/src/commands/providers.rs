//! Providers command for the CLI.

use crate::config::HelperConfig;
use bridge::{resolve_base_chain_provider, resolve_layer2_provider};

/// Reachability of the two networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderStatus {
    /// Whether the layer-2 endpoint answered
    pub layer2: bool,
    /// Whether the base-chain endpoint answered
    pub base_chain: bool,
}

/// Runs the providers command. Unreachable providers are reported, not
/// treated as errors.
pub async fn run(config: &HelperConfig) -> ProviderStatus {
    let endpoints = config.endpoint_table();

    let layer2 = resolve_layer2_provider(&endpoints, &config.network).await;
    let base_chain = resolve_base_chain_provider(&endpoints, &config.network).await;

    ProviderStatus {
        layer2: layer2.is_some(),
        base_chain: base_chain.is_some(),
    }
}
