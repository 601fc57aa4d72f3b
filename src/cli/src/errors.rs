//! Error types for the CLI.

use bridge::BridgeError;
use primitives::PrimitivesError;
use std::error::Error as StdError;
use std::fmt;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Error when a provider cannot be resolved.
    ProviderUnavailable(String),

    /// Error when an address is invalid.
    InvalidAddress(String),

    /// Error when an argument is invalid.
    InvalidArgument(String),

    /// Error when a bridge operation fails.
    BridgeError(BridgeError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ProviderUnavailable(msg) => write!(f, "Provider unavailable: {}", msg),
            CliError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::BridgeError(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for CliError {}

impl From<BridgeError> for CliError {
    fn from(error: BridgeError) -> Self {
        CliError::BridgeError(error)
    }
}

impl From<PrimitivesError> for CliError {
    fn from(error: PrimitivesError) -> Self {
        CliError::InvalidArgument(error.to_string())
    }
}
