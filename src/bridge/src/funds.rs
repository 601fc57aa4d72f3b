//! Moving funds between the base chain and the layer-2 network.

use crate::account::AccountSession;
use crate::errors::BridgeError;
use crate::transfer::packable;
use crate::wallet::{settle, AccountView, DepositRequest, PendingOperation, SigningAccount, WithdrawRequest};
use primitives::units::parse_amount;
use primitives::{Outcome, Token, TxReceipt};
use tracing::{error, info};

/// Deposits `amount` (whole units) of `token` from the base chain into the
/// account's own layer-2 address and waits for the commit receipt.
///
/// A failure while waiting does not mean the deposit failed: it may still be
/// in flight. Any such failure is logged and returned as
/// `Outcome::Indeterminate` with the operation hash, so the caller can poll.
pub async fn deposit_to_layer2<W: SigningAccount>(
    account: &W,
    token: &Token,
    amount: &str,
) -> Result<Outcome<TxReceipt>, BridgeError> {
    let amount = parse_amount(amount, token.decimals)?;

    let pending = account
        .deposit_from_ethereum(DepositRequest {
            deposit_to: account.address(),
            token: token.symbol.clone(),
            amount,
        })
        .await?;
    let tx_hash = pending.hash();

    match pending.await_receipt().await {
        Ok(receipt) => settle(tx_hash, Ok(receipt)),
        Err(e) => {
            error!(
                "Error while awaiting confirmation of deposit {} from the network operators: {}",
                tx_hash, e
            );
            Ok(Outcome::Indeterminate {
                tx_hash,
                reason: e.to_string(),
            })
        }
    }
}

/// Withdraws `amount` of `token` to the account's own base-chain address,
/// paying `fee`, and waits until the withdrawal is verified.
///
/// Amount and fee are rounded down to their packable forms first.
pub async fn withdraw_to_base_chain<W: SigningAccount>(
    session: &AccountSession<W>,
    token: &Token,
    amount: &str,
    fee: &str,
) -> Result<Outcome<TxReceipt>, BridgeError> {
    let (amount, fee) = packable(token, amount, fee)?;

    let pending = session
        .account()
        .withdraw_to_ethereum(WithdrawRequest {
            eth_address: session.address(),
            token: token.symbol.clone(),
            amount,
            fee,
        })
        .await?;

    let outcome = settle(pending.hash(), pending.await_verify_receipt().await)?;
    if outcome.is_completed() {
        info!("ZKP verification is complete for withdrawal {}", pending.hash());
    }

    Ok(outcome)
}
