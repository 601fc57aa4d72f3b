//! Error types for the bridge crate.

use primitives::PrimitivesError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the bridge crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Error when a base-chain operation fails.
    EthereumError(String),

    /// Error when a provider cannot be reached or answers with garbage.
    ProviderError(String),

    /// Error returned by the layer-2 JSON-RPC endpoint.
    RpcError(String),

    /// Error when a transaction cannot be built or submitted.
    TransactionError(String),

    /// Error when a signing operation fails.
    SignatureError(String),

    /// Error when an amount is invalid.
    InvalidAmount(String),

    /// Error when an account has no presence on the layer-2 network.
    UnknownAccount(String),

    /// Error when the network executed an operation and reported it failed.
    Rejected(String),

    /// Error when waiting for the network timed out.
    Timeout(String),

    /// Error from a value conversion.
    Primitives(PrimitivesError),
}

impl BridgeError {
    /// Whether the error leaves the fate of an already submitted operation
    /// unknown, as opposed to the network having answered.
    pub fn is_transient(&self) -> bool {
        matches!(self, BridgeError::ProviderError(_) | BridgeError::Timeout(_))
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::EthereumError(msg) => write!(f, "Ethereum error: {}", msg),
            BridgeError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            BridgeError::RpcError(msg) => write!(f, "RPC error: {}", msg),
            BridgeError::TransactionError(msg) => write!(f, "Transaction error: {}", msg),
            BridgeError::SignatureError(msg) => write!(f, "Signature error: {}", msg),
            BridgeError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            BridgeError::UnknownAccount(msg) => write!(f, "Unknown account: {}", msg),
            BridgeError::Rejected(msg) => write!(f, "Operation rejected: {}", msg),
            BridgeError::Timeout(msg) => write!(f, "Timeout waiting for {}", msg),
            BridgeError::Primitives(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for BridgeError {}

impl From<PrimitivesError> for BridgeError {
    fn from(error: PrimitivesError) -> Self {
        match error {
            PrimitivesError::InvalidAmount(msg) => BridgeError::InvalidAmount(msg),
            other => BridgeError::Primitives(other),
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            BridgeError::Timeout(error.to_string())
        } else {
            BridgeError::ProviderError(error.to_string())
        }
    }
}
