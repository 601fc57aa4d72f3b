//! Fee quotes.

use crate::errors::BridgeError;
use crate::wallet::Layer2Provider;
use primitives::units::format_amount;
use primitives::{Address, FeeType, Token};
use tracing::debug;

/// Quotes the total fee for an operation of `kind` against `address` in
/// `token`, as a whole-unit decimal string.
///
/// Every call asks the network again. The quote only holds at query time.
pub async fn quote_fee<P: Layer2Provider + ?Sized>(
    provider: &P,
    kind: FeeType,
    address: Address,
    token: &Token,
) -> Result<String, BridgeError> {
    let fee = provider.transaction_fee(kind, address, &token.symbol).await?;
    debug!(
        "{} fee on {}: gas {} + proof {} = {}",
        kind,
        provider.network(),
        fee.gas_fee,
        fee.zkp_fee,
        fee.total_fee
    );

    Ok(format_amount(fee.total_fee, token.decimals)?)
}
