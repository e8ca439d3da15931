use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::engine::overflow;
use crate::types::Money;
use crate::InstalmentResult;

const ROUNDING_UNIT: Money = dec!(100);

/// How each computed quantity is post-processed before it enters the schedule.
///
/// The policy is applied to every quantity on its own (installment amount,
/// profit share, remaining balance). A rounded principal portion is the
/// difference of two rounded values and is not itself rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Leave amounts untouched.
    #[default]
    Exact,
    /// Round up to the next multiple of 100.
    CeilingHundred,
}

impl RoundingPolicy {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            RoundingPolicy::CeilingHundred
        } else {
            RoundingPolicy::Exact
        }
    }

    pub fn apply(self, amount: Money) -> InstalmentResult<Money> {
        match self {
            RoundingPolicy::Exact => Ok(amount),
            RoundingPolicy::CeilingHundred => apply_rounding(amount),
        }
    }

    pub fn is_enabled(self) -> bool {
        self != RoundingPolicy::Exact
    }
}

/// `ceil(amount / 100) * 100`
///
/// Fails when the rounded value no longer fits in a `Decimal`.
pub fn apply_rounding(amount: Money) -> InstalmentResult<Money> {
    (amount / ROUNDING_UNIT)
        .ceil()
        .checked_mul(ROUNDING_UNIT)
        .ok_or_else(|| overflow("rounded amount"))
}
