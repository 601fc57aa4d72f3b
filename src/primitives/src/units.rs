//! Conversion between whole-unit decimal strings and base units.

use crate::errors::PrimitivesError;
use ethers::types::U256;
use ethers::utils::{format_units, parse_units};

/// Converts a whole-unit decimal string (e.g. `"1.5"`) into base units.
pub fn parse_amount(amount: &str, decimals: u32) -> Result<U256, PrimitivesError> {
    let amount = amount.trim();
    if amount.is_empty() || amount.starts_with('-') {
        return Err(PrimitivesError::InvalidAmount(format!(
            "'{}' is not a non-negative decimal",
            amount
        )));
    }

    let parsed = parse_units(amount, decimals)
        .map_err(|e| PrimitivesError::InvalidAmount(format!("'{}': {}", amount, e)))?;

    Ok(parsed.into())
}

/// Converts base units into a whole-unit decimal string.
///
/// Trailing fractional zeros are dropped, so one ether formats as `"1"` and
/// zero as `"0"`.
pub fn format_amount(value: U256, decimals: u32) -> Result<String, PrimitivesError> {
    let formatted = format_units(value, decimals)
        .map_err(|e| PrimitivesError::InvalidAmount(format!("{}: {}", value, e)))?;

    if !formatted.contains('.') {
        return Ok(formatted);
    }

    Ok(formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string())
}

/// Parses a base-unit decimal integer string as reported by the network.
pub fn parse_base_units(raw: &str) -> Option<U256> {
    U256::from_dec_str(raw.trim()).ok()
}
