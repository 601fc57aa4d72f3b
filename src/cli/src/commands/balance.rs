//! Balance command for the CLI.

use crate::commands::{layer2, parse_address};
use crate::config::HelperConfig;
use crate::errors::CliError;
use bridge::{report_balances, BalanceReport, WatchedAccount};
use tracing::info;

/// Runs the balance command.
pub async fn run(config: &HelperConfig, address: &str) -> Result<BalanceReport, CliError> {
    let address = parse_address(address)?;
    let token = config.token();
    info!("Getting {} balance for address: {:?}", token, address);

    let provider = layer2(config).await?;
    let account = WatchedAccount::new(provider, address);

    Ok(report_balances(&account, &token).await?)
}
