//! Account binding and signing-key registration.

use crate::errors::BridgeError;
use crate::wallet::{AccountView, PendingOperation, SigningAccount};
use primitives::Address;
use std::error::Error as StdError;
use std::fmt;
use tracing::{debug, info};

/// Binds a layer-2 account to a base-chain signer.
pub async fn bind_account<W: SigningAccount>(
    signer: W::EthSigner,
    provider: W::Provider,
) -> Result<W, BridgeError> {
    let account = W::from_eth_signer(signer, provider).await?;
    debug!("Bound layer-2 account {:?}", account.address());
    Ok(account)
}

/// A layer-2 account whose signing key is known to be registered.
///
/// Only [`ensure_registered`] creates one, so anything taking a session can
/// rely on the account being able to authorise transfers and withdrawals.
#[derive(Debug)]
pub struct AccountSession<W> {
    account: W,
}

impl<W: SigningAccount> AccountSession<W> {
    /// The underlying account.
    pub fn account(&self) -> &W {
        &self.account
    }

    /// Address of the account.
    pub fn address(&self) -> Address {
        self.account.address()
    }

    /// Releases the underlying account.
    pub fn into_inner(self) -> W {
        self.account
    }
}

/// A failed registration, carrying the account back to the caller.
///
/// The account stays usable: an account unknown to the network can deposit
/// and then try to register again with the same handle.
#[derive(Debug)]
pub struct RegistrationError<W> {
    /// The account that failed to register.
    pub account: W,
    /// Why registration failed.
    pub error: BridgeError,
}

impl<W> RegistrationError<W> {
    /// Splits the error into the account and the cause.
    pub fn into_parts(self) -> (W, BridgeError) {
        (self.account, self.error)
    }
}

impl<W> fmt::Display for RegistrationError<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registration failed: {}", self.error)
    }
}

impl<W: fmt::Debug> StdError for RegistrationError<W> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl<W> From<RegistrationError<W>> for BridgeError {
    fn from(error: RegistrationError<W>) -> Self {
        error.error
    }
}

/// Makes sure `account` has a signing key registered on the network.
///
/// Nothing is submitted when the key is already set. An account the network
/// has never seen cannot register a key and fails with
/// [`BridgeError::UnknownAccount`] without submitting anything. On failure
/// the account is handed back inside the [`RegistrationError`].
pub async fn ensure_registered<W: SigningAccount>(
    account: W,
) -> Result<AccountSession<W>, RegistrationError<W>> {
    match register(&account).await {
        Ok(()) => Ok(AccountSession { account }),
        Err(error) => Err(RegistrationError { account, error }),
    }
}

async fn register<W: SigningAccount>(account: &W) -> Result<(), BridgeError> {
    let address = account.address();
    info!("Registering the {:?} account on the layer-2 network", address);

    if account.is_signing_key_set().await? {
        debug!("Signing key for {:?} already set", address);
        return Ok(());
    }

    if account.account_id().await?.is_none() {
        return Err(BridgeError::UnknownAccount(format!("{:?}", address)));
    }

    let pending = account.set_signing_key().await?;
    let receipt = pending.await_receipt().await?;
    if receipt.is_failed() {
        return Err(BridgeError::Rejected(format!(
            "signing key change for {:?}: {}",
            address,
            receipt.fail_reason.as_deref().unwrap_or("no reason given")
        )));
    }

    info!("Signing key for {:?} registered in {}", address, pending.hash());
    Ok(())
}
