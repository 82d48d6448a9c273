//! Decimal odds and the money types derived from them.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Money amounts (investment, stakes, returns, profit) as exact decimals.
pub type Money = Decimal;

/// Probabilities (implied and total) as exact decimals.
pub type Probability = Decimal;

/// Decimal places used for every displayed amount and generated odds value.
pub const DISPLAY_DP: u32 = 2;

/// Round to [`DISPLAY_DP`] places, ties to even.
#[must_use]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount with exactly [`DISPLAY_DP`] decimals, e.g. `24.39`.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_display(value))
}

/// Decimal odds offered by a bookmaker, always strictly greater than 1.
///
/// Odds of `2.10` return 2.10 per unit staked (stake included), so the
/// implied probability is `1 / 2.10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Odds(Decimal);

impl Odds {
    /// Create odds, rejecting values at or below 1.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] when `value <= 1`.
    pub fn try_new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ONE {
            return Err(DomainError::invalid(
                "odds",
                format!("must be greater than 1, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Probability implied by these odds, `1 / odds`.
    #[must_use]
    pub fn implied_probability(self) -> Probability {
        Decimal::ONE / self.0
    }
}

impl TryFrom<Decimal> for Odds {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Odds> for Decimal {
    fn from(odds: Odds) -> Self {
        odds.0
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
