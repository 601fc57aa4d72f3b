//! Value types for the layer-2 helper crates.
//!
//! This crate holds everything the helper layer interprets itself: token
//! descriptions, whole-unit/base-unit conversion, rounding to the network's
//! packable amount and fee representations, the fee-quote and account-state
//! payloads, transaction receipts and the tri-state operation outcome.

pub mod errors;
pub mod outcome;
pub mod packing;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use errors::PrimitivesError;
pub use ethers::types::{Address, U256};
pub use outcome::Outcome;
pub use packing::{PackableAmount, PackableFee};
pub use types::{AccountState, BalanceView, Fee, FeeType, Token, TxReceipt};
