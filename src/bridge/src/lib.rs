//! Helper layer for moving funds between Ethereum and a layer-2 rollup.
//!
//! Every operation here wraps a single call into the network clients:
//! resolving providers, binding and registering an account, depositing,
//! transferring and withdrawing funds, quoting fees and reporting balances.
//! Signing, transaction packing and proof verification stay with the
//! clients, which are reached through the traits in [`wallet`].

pub mod account;
pub mod balance;
pub mod errors;
pub mod fees;
pub mod funds;
pub mod provider;
pub mod rpc;
pub mod transfer;
pub mod wallet;

// Re-export commonly used types and functions
pub use account::{bind_account, ensure_registered, AccountSession, RegistrationError};
pub use balance::{report_balances, BalanceReport, WatchedAccount};
pub use errors::BridgeError;
pub use fees::quote_fee;
pub use funds::{deposit_to_layer2, withdraw_to_base_chain};
pub use provider::{resolve_base_chain_provider, resolve_layer2_provider, Endpoints, NetworkEndpoints};
pub use rpc::RpcProvider;
pub use transfer::transfer;
pub use wallet::{AccountView, Layer2Provider, PendingOperation, SigningAccount};
