//! Transfers between layer-2 accounts.

use crate::account::AccountSession;
use crate::errors::BridgeError;
use crate::wallet::{settle, PendingOperation, SigningAccount, TransferRequest};
use primitives::units::parse_amount;
use primitives::{Address, Outcome, PackableAmount, PackableFee, Token, TxReceipt};
use tracing::{debug, info};

/// Converts whole-unit amount and fee strings to base units and rounds them
/// down to their packable forms.
pub(crate) fn packable(
    token: &Token,
    amount: &str,
    fee: &str,
) -> Result<(PackableAmount, PackableFee), BridgeError> {
    let raw_amount = parse_amount(amount, token.decimals)?;
    let raw_fee = parse_amount(fee, token.decimals)?;

    let amount = PackableAmount::closest(raw_amount);
    let fee = PackableFee::closest(raw_fee);

    if amount.value() != raw_amount {
        debug!("Amount {} rounded down to packable {}", raw_amount, amount);
    }
    if fee.value() != raw_fee {
        debug!("Fee {} rounded down to packable {}", raw_fee, fee);
    }

    Ok((amount, fee))
}

/// Transfers `amount` of `token` to `to`, paying `fee`.
///
/// Both values are whole-unit decimal strings, rounded down to the network's
/// packable forms before submission. Waits for the commit receipt only.
pub async fn transfer<W: SigningAccount>(
    from: &AccountSession<W>,
    to: Address,
    amount: &str,
    fee: &str,
    token: &Token,
) -> Result<Outcome<TxReceipt>, BridgeError> {
    let (amount, fee) = packable(token, amount, fee)?;

    let pending = from
        .account()
        .sync_transfer(TransferRequest {
            to,
            token: token.symbol.clone(),
            amount,
            fee,
        })
        .await?;

    let outcome = settle(pending.hash(), pending.await_receipt().await)?;
    if let Outcome::Completed(receipt) = &outcome {
        info!("Got transfer receipt: {:?}", receipt);
    }

    Ok(outcome)
}
