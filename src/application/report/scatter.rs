//! Per-match profit points for the scatter view.

use serde::Serialize;

use crate::application::stream::MatchReport;
use crate::domain::{MatchId, Money, Odds, OutcomePair};

/// One arbitrage match plotted by match number and profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    pub index: usize,
    pub match_id: MatchId,
    /// Profit rounded to 2 decimal places.
    pub profit: Money,
    pub team_odds: OutcomePair<Odds>,
}

impl ScatterPoint {
    /// Point for `report`, or `None` when the match has no arbitrage.
    #[must_use]
    pub fn from_report(report: &MatchReport) -> Option<Self> {
        let evaluation = report.evaluation()?;
        let profit = evaluation.profit()?;
        Some(Self {
            index: report.index(),
            match_id: report.match_id().clone(),
            profit,
            team_odds: *evaluation.best_odds(),
        })
    }

    /// Odds annotation shown beside the point, e.g. `A: 2.10 / B: 2.00`.
    #[must_use]
    pub fn odds_label(&self) -> String {
        let parts: Vec<String> = self
            .team_odds
            .iter()
            .map(|(outcome, odds)| format!("{}: {}", outcome.short(), odds))
            .collect();
        parts.join(" / ")
    }
}

/// Scatter points for every arbitrage match, in match order.
pub fn scatter_points(reports: &[MatchReport]) -> impl Iterator<Item = ScatterPoint> + '_ {
    reports.iter().filter_map(ScatterPoint::from_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::evaluator::Evaluator;
    use crate::application::stream::{evaluate_all, MissingOddsPolicy};
    use crate::domain::{Match, Quote};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn quote(value: Decimal) -> Quote {
        Quote::new("Bookmaker1", Odds::try_new(value).unwrap())
    }

    #[test]
    fn only_arbitrage_matches_become_points() {
        let fixtures = vec![
            Match::new("Match 1", vec![quote(dec!(1.90))], vec![quote(dec!(1.90))]),
            Match::new("Match 2", vec![quote(dec!(2.10))], vec![quote(dec!(2.00))]),
        ];
        let evaluator = Evaluator::new(dec!(1000)).unwrap();
        let reports = evaluate_all(&fixtures, &evaluator, MissingOddsPolicy::Skip).unwrap();

        let points: Vec<_> = scatter_points(&reports).collect();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].index, 2);
        assert_eq!(points[0].profit, dec!(24.39));
        assert_eq!(points[0].odds_label(), "A: 2.10 / B: 2.00");
    }
}
