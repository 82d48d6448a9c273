//! A match and the bookmaker odds quoted on each of its outcomes.

use super::id::{BookmakerId, MatchId};
use super::odds::Odds;
use super::outcome::{Outcome, OutcomePair};

/// Odds quoted by one bookmaker for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    bookmaker: BookmakerId,
    odds: Odds,
}

impl Quote {
    pub fn new(bookmaker: impl Into<BookmakerId>, odds: Odds) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            odds,
        }
    }

    #[must_use]
    pub const fn bookmaker(&self) -> &BookmakerId {
        &self.bookmaker
    }

    #[must_use]
    pub const fn odds(&self) -> Odds {
        self.odds
    }
}

/// A two-outcome sports match with per-bookmaker odds for each outcome.
///
/// An outcome may carry no quotes at all when the match was supplied
/// externally; evaluation reports that as missing odds data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    id: MatchId,
    quotes: OutcomePair<Vec<Quote>>,
}

impl Match {
    pub fn new(id: impl Into<MatchId>, team_a: Vec<Quote>, team_b: Vec<Quote>) -> Self {
        Self {
            id: id.into(),
            quotes: OutcomePair::new(team_a, team_b),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &MatchId {
        &self.id
    }

    /// Quotes for one outcome in the order they were supplied.
    #[must_use]
    pub fn quotes(&self, outcome: Outcome) -> &[Quote] {
        self.quotes.get(outcome)
    }

    /// Highest odds quoted for `outcome` across all bookmakers.
    ///
    /// Returns `None` when no bookmaker quoted the outcome.
    #[must_use]
    pub fn best_odds(&self, outcome: Outcome) -> Option<Odds> {
        self.quotes(outcome).iter().map(Quote::odds).max()
    }

    /// Number of quotes across both outcomes.
    #[must_use]
    pub fn quote_count(&self) -> usize {
        self.quotes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(value: rust_decimal::Decimal) -> Odds {
        Odds::try_new(value).unwrap()
    }

    #[test]
    fn best_odds_takes_maximum_across_bookmakers() {
        let m = Match::new(
            "Match 1",
            vec![
                Quote::new("Bookmaker1", odds(dec!(2.10))),
                Quote::new("Bookmaker2", odds(dec!(2.05))),
            ],
            vec![
                Quote::new("Bookmaker1", odds(dec!(1.95))),
                Quote::new("Bookmaker2", odds(dec!(2.00))),
            ],
        );

        assert_eq!(m.best_odds(Outcome::TeamA), Some(odds(dec!(2.10))));
        assert_eq!(m.best_odds(Outcome::TeamB), Some(odds(dec!(2.00))));
        assert_eq!(m.quote_count(), 4);
    }

    #[test]
    fn best_odds_is_none_without_quotes() {
        let m = Match::new(
            "Match 2",
            vec![],
            vec![Quote::new("Bookmaker1", odds(dec!(1.90)))],
        );
        assert_eq!(m.best_odds(Outcome::TeamA), None);
        assert!(m.quotes(Outcome::TeamA).is_empty());
    }
}
