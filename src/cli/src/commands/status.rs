//! Status command for the CLI.

use crate::commands::layer2;
use crate::config::HelperConfig;
use crate::errors::CliError;
use primitives::{Outcome, TxReceipt};
use tracing::debug;

/// Runs the status command for a transaction hash.
pub async fn run(config: &HelperConfig, tx_hash: &str) -> Result<Outcome<TxReceipt>, CliError> {
    let provider = layer2(config).await?;
    let outcome = provider.transaction_status(tx_hash).await?;
    debug!("Status of {}: {:?}", tx_hash, outcome);

    Ok(outcome)
}
