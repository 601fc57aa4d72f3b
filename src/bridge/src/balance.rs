//! Balance reporting.

use crate::errors::BridgeError;
use crate::wallet::{AccountView, Layer2Provider};
use async_trait::async_trait;
use primitives::units::format_amount;
use primitives::{AccountState, Address, BalanceView, Token};
use std::fmt;

/// Committed and verified balances of one token, in whole units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    /// Account address
    pub address: Address,
    /// Token symbol
    pub token: String,
    /// Balance accepted by the operator
    pub committed: String,
    /// Balance proven on the base chain
    pub verified: String,
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Committed {} balance for {:?}: {}",
            self.token, self.address, self.committed
        )?;
        write!(
            f,
            "Verified {} balance for {:?}: {}",
            self.token, self.address, self.verified
        )
    }
}

/// Whole-unit balance of `token` in `view`; a token that never appeared in
/// the view has a balance of zero.
fn view_balance(view: &BalanceView, token: &Token) -> Result<String, BridgeError> {
    match view.balance(&token.symbol)? {
        Some(amount) => Ok(format_amount(amount, token.decimals)?),
        None => Ok("0".to_string()),
    }
}

/// Fetches the account's state and prints its committed and verified
/// balances of `token`.
pub async fn report_balances<A: AccountView + ?Sized>(
    account: &A,
    token: &Token,
) -> Result<BalanceReport, BridgeError> {
    let state = account.account_state().await?;

    let report = BalanceReport {
        address: account.address(),
        token: token.symbol.clone(),
        committed: view_balance(&state.committed, token)?,
        verified: view_balance(&state.verified, token)?,
    };
    println!("{}", report);

    Ok(report)
}

/// A read-only view of any account through a provider. Needs no key.
#[derive(Debug, Clone)]
pub struct WatchedAccount<P> {
    provider: P,
    address: Address,
}

impl<P: Layer2Provider> WatchedAccount<P> {
    /// Watches `address` through `provider`.
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait]
impl<P: Layer2Provider> AccountView for WatchedAccount<P> {
    fn address(&self) -> Address {
        self.address
    }

    async fn account_state(&self) -> Result<AccountState, BridgeError> {
        self.provider.account_state(self.address).await
    }
}
