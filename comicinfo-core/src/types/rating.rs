//! Community rating and its precision rules

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal digits a community rating may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RatingPrecision {
    OneDigit,
    #[default]
    TwoDigits,
}

impl RatingPrecision {
    pub fn digits(self) -> u8 {
        match self {
            RatingPrecision::OneDigit => 1,
            RatingPrecision::TwoDigits => 2,
        }
    }

    pub fn from_digits(digits: u8) -> Option<Self> {
        match digits {
            1 => Some(RatingPrecision::OneDigit),
            2 => Some(RatingPrecision::TwoDigits),
            _ => None,
        }
    }
}

impl TryFrom<u8> for RatingPrecision {
    type Error = String;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        Self::from_digits(digits)
            .ok_or_else(|| format!("unsupported rating precision: {digits} digits (expected 1 or 2)"))
    }
}

impl From<RatingPrecision> for u8 {
    fn from(precision: RatingPrecision) -> Self {
        precision.digits()
    }
}

/// Rating given to the book by a community, between 0 and 5
///
/// Any `f64` can be stored; range and precision are enforced by [`check`](Self::check)
/// when the owning document is validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityRating(f64);

impl CommunityRating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of digits after the decimal point in the shortest decimal form
    /// that round-trips to this value
    ///
    /// Rust's float formatting never switches to exponent notation, so this
    /// is an exact count: `4.57` has 2 digits, `0.1 + 0.2` has 17.
    pub fn decimal_digits(self) -> usize {
        let text = self.0.to_string();
        match text.split_once('.') {
            Some((_, fraction)) => fraction.len(),
            None => 0,
        }
    }

    /// Check range, then precision
    pub fn check(self, precision: RatingPrecision) -> Result<(), ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&self.0) {
            return Err(ValidationError::RatingRange { value: self.0 });
        }
        if self.decimal_digits() > usize::from(precision.digits()) {
            return Err(ValidationError::RatingPrecision {
                value: self.0,
                digits: precision.digits(),
            });
        }
        Ok(())
    }
}

impl From<f64> for CommunityRating {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommunityRating {
    /// Negative zero is written as `0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
