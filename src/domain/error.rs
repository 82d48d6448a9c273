//! Domain validation errors.
//!
//! These errors are returned when a domain invariant is violated: a
//! parameter outside its allowed range, a match that cannot be evaluated
//! because one of its outcomes carries no bookmaker odds, or stakes and
//! returns too large for decimal arithmetic.
//!
//! # Examples
//!
//! ```
//! use surebet::domain::error::DomainError;
//! use surebet::domain::Odds;
//! use rust_decimal_macros::dec;
//!
//! let result = Odds::try_new(dec!(0.95));
//! assert!(matches!(result, Err(DomainError::InvalidParameter { name: "odds", .. })));
//! ```

use thiserror::Error;

use super::outcome::Outcome;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A parameter is outside its allowed range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An outcome of a match has no bookmaker odds to evaluate.
    #[error("match '{match_id}' has no odds for {outcome}")]
    MissingOddsData {
        /// The match that could not be evaluated.
        match_id: String,
        /// The outcome with an empty odds book.
        outcome: Outcome,
    },

    /// Stakes or returns for a match exceed the decimal range.
    #[error("match '{match_id}': {quantity} overflows decimal range")]
    ArithmeticOverflow {
        match_id: String,
        /// Which computed amount overflowed (`stake`, `return`, `profit`).
        quantity: &'static str,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
