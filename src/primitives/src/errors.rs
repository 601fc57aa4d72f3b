//! Error types for the primitives crate.

use thiserror::Error;

/// Errors that can occur in the primitives crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitivesError {
    /// Error when a whole-unit amount string cannot be converted.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Error when a balance reported by the network is not a decimal integer.
    #[error("Invalid balance for {token}: {value}")]
    InvalidBalance {
        /// The token symbol the balance was reported under
        token: String,
        /// The raw value
        value: String,
    },

    /// Error when a fee type name is not recognised.
    #[error("Unknown fee type: {0}")]
    UnknownFeeType(String),
}
