//! Fee command for the CLI.

use crate::commands::{layer2, parse_address};
use crate::config::HelperConfig;
use crate::errors::CliError;
use bridge::quote_fee;
use primitives::FeeType;
use tracing::info;

/// Runs the fee command and returns the quoted fee in whole units.
pub async fn run(config: &HelperConfig, kind: &str, address: &str) -> Result<String, CliError> {
    let kind: FeeType = kind.parse()?;
    let address = parse_address(address)?;
    let token = config.token();
    info!("Quoting {} fee for {:?} in {}", kind, address, token);

    let provider = layer2(config).await?;
    Ok(quote_fee(&provider, kind, address, &token).await?)
}
