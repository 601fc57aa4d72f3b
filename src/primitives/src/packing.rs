//! Rounding to the network's packable amount and fee representations.
//!
//! Transfer and withdrawal amounts are carried in a 5-byte decimal float
//! (35-bit mantissa, 5-bit exponent) and fees in a 2-byte one (11-bit
//! mantissa, 5-bit exponent). A value is packable when it equals
//! `mantissa * 10^exponent` for a mantissa and exponent that fit. Anything
//! else is rounded down to the closest packable value below it. Only the
//! rounding lives here; the byte encoding belongs to the network client.

use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A base-10 floating-point layout with fixed mantissa and exponent widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    /// Width of the exponent field in bits
    pub exponent_bits: u32,
    /// Width of the mantissa field in bits
    pub mantissa_bits: u32,
}

/// Layout for transaction amounts (5 bytes).
pub const AMOUNT_FORMAT: FloatFormat = FloatFormat {
    exponent_bits: 5,
    mantissa_bits: 35,
};

/// Layout for transaction fees (2 bytes).
pub const FEE_FORMAT: FloatFormat = FloatFormat {
    exponent_bits: 5,
    mantissa_bits: 11,
};

impl FloatFormat {
    /// Largest mantissa the layout can hold.
    pub fn max_mantissa(&self) -> U256 {
        (U256::one() << self.mantissa_bits as usize) - U256::one()
    }

    /// Largest exponent the layout can hold.
    pub fn max_exponent(&self) -> u32 {
        (1u32 << self.exponent_bits) - 1
    }

    /// Largest value the layout can represent.
    pub fn max_value(&self) -> U256 {
        self.max_mantissa() * U256::exp10(self.max_exponent() as usize)
    }

    /// Splits `value` into the mantissa and exponent of the closest
    /// representable value not exceeding it.
    pub fn decompose(&self, value: U256) -> (U256, u32) {
        let max_mantissa = self.max_mantissa();
        let max_exponent = self.max_exponent();
        let ten = U256::from(10u8);

        let mut mantissa = value;
        let mut exponent = 0u32;
        while mantissa > max_mantissa && exponent < max_exponent {
            mantissa /= ten;
            exponent += 1;
        }

        if mantissa > max_mantissa {
            return (max_mantissa, max_exponent);
        }

        (mantissa, exponent)
    }

    /// Rounds `value` down to the closest representable value.
    pub fn round_down(&self, value: U256) -> U256 {
        let (mantissa, exponent) = self.decompose(value);
        mantissa * U256::exp10(exponent as usize)
    }

    /// Returns true when `value` is exactly representable.
    pub fn is_packable(&self, value: U256) -> bool {
        self.round_down(value) == value
    }
}

/// A transaction amount already rounded to the 5-byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackableAmount(U256);

impl PackableAmount {
    /// Rounds `value` down to the closest packable amount.
    pub fn closest(value: U256) -> Self {
        Self(AMOUNT_FORMAT.round_down(value))
    }

    /// The rounded value in base units.
    pub fn value(&self) -> U256 {
        self.0
    }
}

impl From<PackableAmount> for U256 {
    fn from(amount: PackableAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for PackableAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transaction fee already rounded to the 2-byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackableFee(U256);

impl PackableFee {
    /// Rounds `value` down to the closest packable fee.
    pub fn closest(value: U256) -> Self {
        Self(FEE_FORMAT.round_down(value))
    }

    /// The rounded value in base units.
    pub fn value(&self) -> U256 {
        self.0
    }
}

impl From<PackableFee> for U256 {
    fn from(fee: PackableFee) -> Self {
        fee.0
    }
}

impl fmt::Display for PackableFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
