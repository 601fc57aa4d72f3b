//! Provider resolution for the base chain and the layer-2 network.
//!
//! Both resolvers fail soft: any problem is logged once and the caller gets
//! `None` back instead of an error.

use crate::rpc::RpcProvider;
use ethers::providers::{Http, Middleware, Provider};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info};

/// Endpoints of one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEndpoints {
    /// Layer-2 JSON-RPC endpoint
    #[serde(default)]
    pub layer2: Option<String>,
    /// Base-chain JSON-RPC endpoint
    #[serde(default)]
    pub base_chain: Option<String>,
}

impl NetworkEndpoints {
    fn new(layer2: Option<&str>, base_chain: Option<&str>) -> Self {
        Self {
            layer2: layer2.map(str::to_string),
            base_chain: base_chain.map(str::to_string),
        }
    }
}

/// Endpoint table keyed by network name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Endpoints per network
    pub networks: BTreeMap<String, NetworkEndpoints>,
    /// Timeout for a single request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Endpoints {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            "localhost".to_string(),
            NetworkEndpoints::new(Some("http://127.0.0.1:3030"), Some("http://127.0.0.1:8545")),
        );
        networks.insert(
            "mainnet".to_string(),
            NetworkEndpoints::new(Some("https://api.zksync.io/jsrpc"), Some("https://cloudflare-eth.com")),
        );
        networks.insert(
            "rinkeby".to_string(),
            NetworkEndpoints::new(
                Some("https://rinkeby-api.zksync.io/jsrpc"),
                Some("https://rinkeby.infura.io/v3/84842078b09946638c03157f83405213"),
            ),
        );
        networks.insert(
            "ropsten".to_string(),
            NetworkEndpoints::new(
                Some("https://ropsten-api.zksync.io/jsrpc"),
                Some("https://ropsten.infura.io/v3/84842078b09946638c03157f83405213"),
            ),
        );

        Self {
            networks,
            request_timeout_secs: 30,
        }
    }
}

impl Endpoints {
    /// Returns the endpoints configured for `network`.
    pub fn get(&self, network: &str) -> Option<&NetworkEndpoints> {
        self.networks.get(network)
    }

    /// Overrides the endpoints set in `overrides`, keeping the rest.
    pub fn merge(&mut self, overrides: &BTreeMap<String, NetworkEndpoints>) {
        for (network, endpoints) in overrides {
            let entry = self.networks.entry(network.clone()).or_default();
            if endpoints.layer2.is_some() {
                entry.layer2 = endpoints.layer2.clone();
            }
            if endpoints.base_chain.is_some() {
                entry.base_chain = endpoints.base_chain.clone();
            }
        }
    }

    /// Timeout applied to every request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Connects to the layer-2 network named `network`.
///
/// Returns `None` and logs one error when the network is not configured or
/// its endpoint does not answer.
pub async fn resolve_layer2_provider(endpoints: &Endpoints, network: &str) -> Option<RpcProvider> {
    let url = match endpoints.get(network).and_then(|e| e.layer2.as_deref()) {
        Some(url) => url,
        None => {
            error!("Unable to connect to the layer-2 network: no endpoint for '{}'", network);
            return None;
        }
    };

    let provider = match RpcProvider::new(network, url, endpoints.request_timeout()) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Unable to connect to the layer-2 network '{}': {}", network, e);
            return None;
        }
    };

    match provider.contract_address().await {
        Ok(contracts) => {
            info!(
                "Connected to layer-2 network '{}' at {} (main contract {})",
                network, url, contracts.main_contract
            );
            Some(provider)
        }
        Err(e) => {
            error!("Unable to connect to the layer-2 network '{}': {}", network, e);
            None
        }
    }
}

/// Connects to the base chain named `network`.
///
/// Returns `None` and logs one error when the network is not configured or
/// its endpoint does not answer.
pub async fn resolve_base_chain_provider(endpoints: &Endpoints, network: &str) -> Option<Provider<Http>> {
    let url = match endpoints.get(network).and_then(|e| e.base_chain.as_deref()) {
        Some(url) => url,
        None => {
            error!("Could not connect to the base chain: no endpoint for '{}'", network);
            return None;
        }
    };

    let http = match reqwest::Url::parse(url) {
        Ok(parsed) => match reqwest::Client::builder()
            .timeout(endpoints.request_timeout())
            .build()
        {
            Ok(client) => Http::new_with_client(parsed, client),
            Err(e) => {
                error!("Could not connect to the base chain '{}': {}", network, e);
                return None;
            }
        },
        Err(e) => {
            error!("Could not connect to the base chain '{}': invalid endpoint {}: {}", network, url, e);
            return None;
        }
    };
    let provider = Provider::new(http);

    match provider.get_chainid().await {
        Ok(chain_id) => {
            info!("Connected to base chain '{}' at {} (chain id {})", network, url, chain_id);
            Some(provider)
        }
        Err(e) => {
            error!("Could not connect to the base chain '{}': {}", network, e);
            None
        }
    }
}
