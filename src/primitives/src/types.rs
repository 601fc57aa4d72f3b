//! Payload types exchanged with the layer-2 network.
//!
//! Field names follow the network's JSON-RPC wire format exactly
//! (`feeType`, `totalFee`, `pubKeyHash`, ...), so these types can be decoded
//! from and re-encoded to the same JSON the network client produces.

use crate::errors::PrimitivesError;
use crate::units::parse_base_units;
use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A token as addressed by the helper layer: its symbol on the network and
/// the number of decimals used to convert whole units to base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Symbol the network uses for the token (e.g. "ETH")
    pub symbol: String,
    /// Number of decimals of the token's base unit
    pub decimals: u32,
}

impl Token {
    /// Creates a token description.
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Ether, with 18 decimals.
    pub fn eth() -> Self {
        Self::new("ETH", 18)
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::eth()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Operation type a fee is quoted for. The number of chunks an operation
/// occupies in a block differs between types and changes the total fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeType {
    /// Withdrawal to the base chain
    Withdraw,
    /// Withdrawal processed without waiting for a full block
    FastWithdraw,
    /// Transfer to an account that already exists on the network
    Transfer,
    /// Transfer that creates the recipient account
    TransferToNew,
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeeType::Withdraw => "Withdraw",
            FeeType::FastWithdraw => "FastWithdraw",
            FeeType::Transfer => "Transfer",
            FeeType::TransferToNew => "TransferToNew",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FeeType {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "withdraw" => Ok(FeeType::Withdraw),
            "fastwithdraw" => Ok(FeeType::FastWithdraw),
            "transfer" => Ok(FeeType::Transfer),
            "transfertonew" => Ok(FeeType::TransferToNew),
            _ => Err(PrimitivesError::UnknownFeeType(s.to_string())),
        }
    }
}

/// Fee estimate returned by the network's `get_tx_fee` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    /// Operation type the fee applies to
    pub fee_type: FeeType,
    /// Amount of gas used by the operation
    #[serde(with = "dec_u256")]
    pub gas_tx_amount: U256,
    /// Gas price in wei
    #[serde(with = "dec_u256")]
    pub gas_price_wei: U256,
    /// Base-chain gas part of the fee
    #[serde(with = "dec_u256")]
    pub gas_fee: U256,
    /// Zero-knowledge proof part of the fee
    #[serde(with = "dec_u256")]
    pub zkp_fee: U256,
    /// Sum of the components; this is the value to pay as the operation fee
    #[serde(with = "dec_u256")]
    pub total_fee: U256,
}

/// One view (committed or verified) of an account's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    /// Balances in base units keyed by token symbol
    #[serde(default)]
    pub balances: BTreeMap<String, String>,
    /// Account nonce in this view
    #[serde(default)]
    pub nonce: u32,
    /// Hash of the registered signing key, `sync:` followed by zeros when unset
    #[serde(default)]
    pub pub_key_hash: String,
}

impl BalanceView {
    /// Returns the balance of `symbol` in base units, or `None` when the token
    /// has never appeared in this view.
    pub fn balance(&self, symbol: &str) -> Result<Option<U256>, PrimitivesError> {
        match self.balances.get(symbol) {
            None => Ok(None),
            Some(raw) => parse_base_units(raw)
                .map(Some)
                .ok_or_else(|| PrimitivesError::InvalidBalance {
                    token: symbol.to_string(),
                    value: raw.clone(),
                }),
        }
    }
}

/// A deposit seen on the base chain but not yet credited on the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositingBalance {
    /// Amount in base units
    pub amount: String,
    /// Base-chain block after which the deposit is accepted
    pub expected_accept_block: u64,
}

/// Deposits in flight for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositingState {
    /// Pending deposits keyed by token symbol
    #[serde(default)]
    pub balances: BTreeMap<String, DepositingBalance>,
}

/// Snapshot of an account as returned by the network's `account_info` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Account address
    pub address: Address,
    /// Account id, absent until the account has appeared on the network
    pub id: Option<u32>,
    /// Deposits not yet credited
    #[serde(default)]
    pub depositing: DepositingState,
    /// State accepted by the operator
    pub committed: BalanceView,
    /// State proven on the base chain
    pub verified: BalanceView,
}

/// Block an operation was included in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    /// Block number
    pub block_number: u64,
    /// Whether the block has been committed
    pub committed: bool,
    /// Whether the block has been verified
    pub verified: bool,
}

/// Receipt for a submitted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// Whether the operation has been executed by the operator
    pub executed: bool,
    /// Execution result, absent while not executed
    #[serde(default)]
    pub success: Option<bool>,
    /// Reason given for a failed execution
    #[serde(default)]
    pub fail_reason: Option<String>,
    /// Block the operation landed in
    #[serde(default)]
    pub block: Option<BlockInfo>,
}

impl TxReceipt {
    /// Whether the operation was executed and reported as failed.
    pub fn is_failed(&self) -> bool {
        self.executed && self.success == Some(false)
    }

    /// Whether the block holding the operation has been verified.
    pub fn is_verified(&self) -> bool {
        self.block.as_ref().map(|b| b.verified).unwrap_or(false)
    }
}

/// Serializes `U256` as the decimal strings the network uses.
mod dec_u256 {
    use ethers::types::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => U256::from_dec_str(&s).map_err(de::Error::custom),
            Raw::Number(n) => Ok(U256::from(n)),
        }
    }
}
