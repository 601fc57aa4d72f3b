//! Capability traits for the network clients this layer drives.
//!
//! The helpers only depend on the methods below. A layer-2 client library
//! (or a test double) plugs in by implementing them; signing and transaction
//! packing stay on the implementor's side.

use crate::errors::BridgeError;
use async_trait::async_trait;
use ethers::signers::Signer;
use primitives::{AccountState, Address, Fee, FeeType, Outcome, PackableAmount, PackableFee, TxReceipt, U256};
use tracing::warn;

/// Read access to the layer-2 network.
#[async_trait]
pub trait Layer2Provider: Send + Sync {
    /// Name of the network the provider talks to.
    fn network(&self) -> &str;

    /// Fee estimate for an operation of `fee_type` against `address` in `token`.
    async fn transaction_fee(
        &self,
        fee_type: FeeType,
        address: Address,
        token: &str,
    ) -> Result<Fee, BridgeError>;

    /// Current state snapshot of the account at `address`.
    async fn account_state(&self, address: Address) -> Result<AccountState, BridgeError>;
}

/// An operation that has been submitted and can be waited on.
#[async_trait]
pub trait PendingOperation: Send + Sync {
    /// Hash identifying the operation on the network.
    fn hash(&self) -> String;

    /// Waits until the operation is included in a committed block.
    async fn await_receipt(&self) -> Result<TxReceipt, BridgeError>;

    /// Waits until the block holding the operation is verified on the base chain.
    async fn await_verify_receipt(&self) -> Result<TxReceipt, BridgeError>;
}

/// Read access to a single account.
#[async_trait]
pub trait AccountView: Send + Sync {
    /// Address of the account.
    fn address(&self) -> Address;

    /// Current state snapshot of the account.
    async fn account_state(&self) -> Result<AccountState, BridgeError>;
}

/// Deposit of base-chain funds into a layer-2 account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// Layer-2 account to credit
    pub deposit_to: Address,
    /// Token symbol
    pub token: String,
    /// Amount in base units
    pub amount: U256,
}

/// Transfer between two layer-2 accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient
    pub to: Address,
    /// Token symbol
    pub token: String,
    /// Amount, already packable
    pub amount: PackableAmount,
    /// Fee, already packable
    pub fee: PackableFee,
}

/// Withdrawal from a layer-2 account to a base-chain address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    /// Base-chain recipient
    pub eth_address: Address,
    /// Token symbol
    pub token: String,
    /// Amount, already packable
    pub amount: PackableAmount,
    /// Fee, already packable
    pub fee: PackableFee,
}

/// A layer-2 account bound to a base-chain signing key.
#[async_trait]
pub trait SigningAccount: AccountView + Sized {
    /// Base-chain signer the account is derived from.
    type EthSigner: Signer + 'static;
    /// Provider the account submits through.
    type Provider: Layer2Provider;
    /// Handle returned for submitted operations.
    type Pending: PendingOperation;

    /// Binds a layer-2 account to `signer` on the network behind `provider`.
    async fn from_eth_signer(
        signer: Self::EthSigner,
        provider: Self::Provider,
    ) -> Result<Self, BridgeError>;

    /// Id assigned by the network, `None` while the account is unknown to it.
    async fn account_id(&self) -> Result<Option<u32>, BridgeError>;

    /// Whether a signing key is registered for the account.
    async fn is_signing_key_set(&self) -> Result<bool, BridgeError>;

    /// Submits the operation that registers the account's signing key.
    async fn set_signing_key(&self) -> Result<Self::Pending, BridgeError>;

    /// Submits a deposit from the base chain.
    async fn deposit_from_ethereum(&self, request: DepositRequest) -> Result<Self::Pending, BridgeError>;

    /// Submits a layer-2 transfer.
    async fn sync_transfer(&self, request: TransferRequest) -> Result<Self::Pending, BridgeError>;

    /// Submits a withdrawal to the base chain.
    async fn withdraw_to_ethereum(&self, request: WithdrawRequest) -> Result<Self::Pending, BridgeError>;
}

/// Classifies the result of waiting on a submitted operation.
///
/// A receipt reporting failure and any error the network answered with mean
/// the operation did not complete. Transport failures and timeouts leave it
/// in flight, so they become `Outcome::Indeterminate`.
pub(crate) fn settle(
    tx_hash: String,
    waited: Result<TxReceipt, BridgeError>,
) -> Result<Outcome<TxReceipt>, BridgeError> {
    match waited {
        Ok(receipt) if receipt.is_failed() => Err(BridgeError::Rejected(format!(
            "{}: {}",
            tx_hash,
            receipt.fail_reason.as_deref().unwrap_or("no reason given")
        ))),
        Ok(receipt) => Ok(Outcome::Completed(receipt)),
        Err(e) if e.is_transient() => {
            warn!("Status of {} unknown: {}", tx_hash, e);
            Ok(Outcome::Indeterminate {
                tx_hash,
                reason: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}
