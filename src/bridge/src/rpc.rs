//! JSON-RPC client for the layer-2 network's public API.

use crate::errors::BridgeError;
use crate::wallet::Layer2Provider;
use async_trait::async_trait;
use primitives::{AccountState, Address, Fee, FeeType, Outcome, TxReceipt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Addresses of the network's contracts on the base chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddress {
    /// Main rollup contract
    pub main_contract: String,
    /// Governance contract
    pub gov_contract: String,
}

/// A handle to the layer-2 network over its JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcProvider {
    /// The HTTP client
    client: reqwest::Client,
    /// The JSON-RPC endpoint
    url: String,
    /// The network name the endpoint was resolved for
    network: String,
}

impl RpcProvider {
    /// Creates a provider for `url`. No request is made.
    pub fn new(network: &str, url: &str, timeout: Duration) -> Result<Self, BridgeError> {
        reqwest::Url::parse(url)
            .map_err(|e| BridgeError::ProviderError(format!("Invalid endpoint {}: {}", url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BridgeError::ProviderError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
            network: network.to_string(),
        })
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, BridgeError> {
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        debug!("-> {} {}", method, params);

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::ProviderError(format!(
                "{} answered {} to {}",
                self.url, status, method
            )));
        }

        let response: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BridgeError::ProviderError(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = response.get("error") {
            if !error.is_null() {
                let message = error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string());
                return Err(BridgeError::RpcError(format!("{}: {}", method, message)));
            }
        }

        let result = response
            .get("result")
            .cloned()
            .ok_or_else(|| BridgeError::ProviderError(format!("No result in response to {}", method)))?;

        serde_json::from_value(result).map_err(|e| {
            BridgeError::ProviderError(format!("Unexpected {} result: {}", method, e))
        })
    }

    /// Queries the network's contract addresses. Used as a reachability probe.
    pub async fn contract_address(&self) -> Result<ContractAddress, BridgeError> {
        self.call("contract_address", serde_json::json!([])).await
    }

    /// Queries the state snapshot of an account.
    pub async fn account_info(&self, address: Address) -> Result<AccountState, BridgeError> {
        self.call("account_info", serde_json::json!([address])).await
    }

    /// Queries the fee for an operation.
    pub async fn get_tx_fee(
        &self,
        fee_type: FeeType,
        address: Address,
        token: &str,
    ) -> Result<Fee, BridgeError> {
        self.call("get_tx_fee", serde_json::json!([fee_type, address, token]))
            .await
    }

    /// Queries the receipt of a transaction by hash.
    pub async fn tx_info(&self, tx_hash: &str) -> Result<TxReceipt, BridgeError> {
        self.call("tx_info", serde_json::json!([tx_hash])).await
    }

    /// Checks once whether a submitted transaction has completed.
    ///
    /// Not yet executed is `Indeterminate`; executed and failed is
    /// `Err(Rejected)`.
    pub async fn transaction_status(&self, tx_hash: &str) -> Result<Outcome<TxReceipt>, BridgeError> {
        let receipt = self.tx_info(tx_hash).await?;

        if !receipt.executed {
            return Ok(Outcome::Indeterminate {
                tx_hash: tx_hash.to_string(),
                reason: "not executed yet".to_string(),
            });
        }

        if receipt.is_failed() {
            return Err(BridgeError::Rejected(format!(
                "{}: {}",
                tx_hash,
                receipt.fail_reason.as_deref().unwrap_or("no reason given")
            )));
        }

        Ok(Outcome::Completed(receipt))
    }
}

#[async_trait]
impl Layer2Provider for RpcProvider {
    fn network(&self) -> &str {
        &self.network
    }

    async fn transaction_fee(
        &self,
        fee_type: FeeType,
        address: Address,
        token: &str,
    ) -> Result<Fee, BridgeError> {
        self.get_tx_fee(fee_type, address, token).await
    }

    async fn account_state(&self, address: Address) -> Result<AccountState, BridgeError> {
        self.account_info(address).await
    }
}
