//! Arbitrage evaluation for two-outcome matches.
//!
//! For each outcome the best (highest) odds across bookmakers is taken. When
//! the implied probabilities of those best odds sum to less than 1, staking
//! the investment in proportion to each implied probability returns the same
//! amount whichever outcome wins, and that amount exceeds the investment.

use rust_decimal::Decimal;

use crate::domain::{Arbitrage, DomainError, Evaluation, Match, Money, Odds, OutcomePair, Probability};

/// Evaluate `fixture` for arbitrage at the given investment.
///
/// Pure function of its inputs: evaluating the same match twice yields the
/// same result.
///
/// # Errors
///
/// - [`DomainError::InvalidParameter`] when `investment <= 0`
/// - [`DomainError::MissingOddsData`] when an outcome has no quotes
pub fn evaluate(fixture: &Match, investment: Money) -> Result<Evaluation, DomainError> {
    validate_investment(investment)?;
    evaluate_unchecked(fixture, investment)
}

/// Evaluator bound to a validated investment amount.
///
/// Validates the investment once so evaluating a stream of matches only
/// fails on per-match data problems.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    investment: Money,
}

impl Evaluator {
    /// Create an evaluator for the given investment.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] when `investment <= 0`.
    pub fn new(investment: Money) -> Result<Self, DomainError> {
        validate_investment(investment)?;
        Ok(Self { investment })
    }

    #[must_use]
    pub const fn investment(&self) -> Money {
        self.investment
    }

    /// Evaluate one match.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingOddsData`] when an outcome has no quotes.
    pub fn evaluate(&self, fixture: &Match) -> Result<Evaluation, DomainError> {
        evaluate_unchecked(fixture, self.investment)
    }
}

fn validate_investment(investment: Money) -> Result<(), DomainError> {
    if investment <= Decimal::ZERO {
        return Err(DomainError::invalid(
            "investment",
            format!("must be greater than 0, got {investment}"),
        ));
    }
    Ok(())
}

fn evaluate_unchecked(fixture: &Match, investment: Money) -> Result<Evaluation, DomainError> {
    let best_odds = OutcomePair::try_from_fn(|outcome| {
        fixture
            .best_odds(outcome)
            .ok_or_else(|| DomainError::MissingOddsData {
                match_id: fixture.id().to_string(),
                outcome,
            })
    })?;

    let implied = best_odds.map(|odds| odds.implied_probability());
    let total_probability = implied.team_a + implied.team_b;

    let arbitrage = if total_probability < Decimal::ONE {
        Some(arbitrage_for(fixture, investment, &best_odds, &implied, total_probability)?)
    } else {
        None
    };

    Ok(Evaluation::new(
        fixture.id().clone(),
        investment,
        best_odds,
        implied,
        total_probability,
        arbitrage,
    ))
}

/// Proportional stakes, the return on each outcome and the guaranteed profit.
///
/// Amounts beyond the decimal range surface as
/// [`DomainError::ArithmeticOverflow`].
fn arbitrage_for(
    fixture: &Match,
    investment: Money,
    best_odds: &OutcomePair<Odds>,
    implied: &OutcomePair<Probability>,
    total_probability: Probability,
) -> Result<Arbitrage, DomainError> {
    let overflow = |quantity: &'static str| DomainError::ArithmeticOverflow {
        match_id: fixture.id().to_string(),
        quantity,
    };

    let stakes = OutcomePair::try_from_fn(|outcome| {
        investment
            .checked_mul(*implied.get(outcome))
            .and_then(|weighted| weighted.checked_div(total_probability))
            .ok_or_else(|| overflow("stake"))
    })?;
    let returns = OutcomePair::try_from_fn(|outcome| {
        stakes
            .get(outcome)
            .checked_mul(best_odds.get(outcome).value())
            .ok_or_else(|| overflow("return"))
    })?;
    let exact_profit = returns
        .team_a
        .min(returns.team_b)
        .checked_sub(investment)
        .ok_or_else(|| overflow("profit"))?;

    Ok(Arbitrage::new(stakes, returns, exact_profit))
}
