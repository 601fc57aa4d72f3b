//! Commands for the CLI.

pub mod balance;
pub mod fee;
pub mod providers;
pub mod status;

use crate::config::HelperConfig;
use crate::errors::CliError;
use bridge::{resolve_layer2_provider, RpcProvider};
use primitives::Address;

/// Connects to the configured layer-2 network.
pub(crate) async fn layer2(config: &HelperConfig) -> Result<RpcProvider, CliError> {
    resolve_layer2_provider(&config.endpoint_table(), &config.network)
        .await
        .ok_or_else(|| CliError::ProviderUnavailable(format!("layer-2 network '{}'", config.network)))
}

/// Parses a hex address, with or without the `0x` prefix.
pub fn parse_address(input: &str) -> Result<Address, CliError> {
    input
        .trim()
        .trim_start_matches("0x")
        .parse::<Address>()
        .map_err(|e| CliError::InvalidAddress(format!("{}: {}", input, e)))
}
