//! Results of evaluating one match for arbitrage.
//!
//! - [`Evaluation`] - best odds, implied probabilities and the arbitrage verdict
//! - [`Arbitrage`] - stake allocation and guaranteed profit when one exists

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::MatchId;
use super::odds::{round_display, Money, Odds, Probability};
use super::outcome::OutcomePair;

/// Stake allocation for a detected arbitrage.
///
/// Stakes are proportional to each outcome's implied probability, which makes
/// every outcome return the same amount. The profit kept here is exact; use
/// [`Arbitrage::profit`] for the 2-decimal figure shown to operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arbitrage {
    stakes: OutcomePair<Money>,
    returns: OutcomePair<Money>,
    exact_profit: Money,
}

impl Arbitrage {
    pub(crate) const fn new(
        stakes: OutcomePair<Money>,
        returns: OutcomePair<Money>,
        exact_profit: Money,
    ) -> Self {
        Self {
            stakes,
            returns,
            exact_profit,
        }
    }

    #[must_use]
    pub const fn stakes(&self) -> &OutcomePair<Money> {
        &self.stakes
    }

    #[must_use]
    pub const fn returns(&self) -> &OutcomePair<Money> {
        &self.returns
    }

    /// Smallest return across outcomes; what the bettor is guaranteed to get back.
    #[must_use]
    pub fn guaranteed_return(&self) -> Money {
        self.returns.team_a.min(self.returns.team_b)
    }

    /// Guaranteed profit at full precision.
    #[must_use]
    pub const fn exact_profit(&self) -> Money {
        self.exact_profit
    }

    /// Guaranteed profit rounded to 2 decimal places.
    #[must_use]
    pub fn profit(&self) -> Money {
        round_display(self.exact_profit)
    }
}

/// Outcome of evaluating one match at a given investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    match_id: MatchId,
    investment: Money,
    best_odds: OutcomePair<Odds>,
    implied_probability: OutcomePair<Probability>,
    total_probability: Probability,
    arbitrage: Option<Arbitrage>,
}

impl Evaluation {
    pub(crate) const fn new(
        match_id: MatchId,
        investment: Money,
        best_odds: OutcomePair<Odds>,
        implied_probability: OutcomePair<Probability>,
        total_probability: Probability,
        arbitrage: Option<Arbitrage>,
    ) -> Self {
        Self {
            match_id,
            investment,
            best_odds,
            implied_probability,
            total_probability,
            arbitrage,
        }
    }

    #[must_use]
    pub const fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    #[must_use]
    pub const fn investment(&self) -> Money {
        self.investment
    }

    /// Best odds per outcome (the "team odds" shown in reports).
    #[must_use]
    pub const fn best_odds(&self) -> &OutcomePair<Odds> {
        &self.best_odds
    }

    #[must_use]
    pub const fn implied_probability(&self) -> &OutcomePair<Probability> {
        &self.implied_probability
    }

    /// Sum of implied probabilities of the best odds.
    #[must_use]
    pub const fn total_probability(&self) -> Probability {
        self.total_probability
    }

    /// Total probability as a percentage rounded to 2 decimal places.
    #[must_use]
    pub fn total_probability_pct(&self) -> Decimal {
        round_display(self.total_probability * Decimal::ONE_HUNDRED)
    }

    #[must_use]
    pub const fn is_arbitrage(&self) -> bool {
        self.arbitrage.is_some()
    }

    #[must_use]
    pub const fn arbitrage(&self) -> Option<&Arbitrage> {
        self.arbitrage.as_ref()
    }

    /// Rounded profit, or `None` when there is no arbitrage.
    #[must_use]
    pub fn profit(&self) -> Option<Money> {
        self.arbitrage.as_ref().map(Arbitrage::profit)
    }

    /// Rounded profit, or `default` when there is no arbitrage.
    #[must_use]
    pub fn profit_or(&self, default: Money) -> Money {
        self.profit().unwrap_or(default)
    }

    /// Exact profit, or `default` when there is no arbitrage.
    #[must_use]
    pub fn exact_profit_or(&self, default: Money) -> Money {
        self.arbitrage
            .as_ref()
            .map_or(default, Arbitrage::exact_profit)
    }
}
