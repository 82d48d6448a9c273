//! Final summary of a run: arbitrage count, total profit and one row per
//! arbitrage match.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::stream::MatchReport;
use crate::domain::{round_display, MatchId, Money, Odds};

/// One arbitrage match in the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub match_id: MatchId,
    /// Total implied probability as a percentage, 2 decimals.
    pub total_probability_pct: Decimal,
    /// Guaranteed profit, 2 decimals.
    pub profit: Money,
    pub team_a_odds: Odds,
    pub team_b_odds: Odds,
}

/// Aggregate results of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub matches: usize,
    pub skipped: usize,
    pub rows: Vec<SummaryRow>,
    /// Sum of exact profits across arbitrage matches.
    pub exact_total_profit: Money,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[MatchReport]) -> Self {
        let mut summary = Self {
            matches: reports.len(),
            ..Self::default()
        };

        for report in reports {
            if report.is_skipped() {
                summary.skipped += 1;
                continue;
            }
            let Some(evaluation) = report.evaluation() else {
                continue;
            };
            let Some(arbitrage) = evaluation.arbitrage() else {
                continue;
            };

            summary.exact_total_profit = summary
                .exact_total_profit
                .saturating_add(arbitrage.exact_profit());
            summary.rows.push(SummaryRow {
                match_id: report.match_id().clone(),
                total_probability_pct: evaluation.total_probability_pct(),
                profit: arbitrage.profit(),
                team_a_odds: evaluation.best_odds().team_a,
                team_b_odds: evaluation.best_odds().team_b,
            });
        }

        summary
    }

    #[must_use]
    pub fn arbitrage_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn has_opportunities(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Total guaranteed profit rounded to 2 decimals.
    #[must_use]
    pub fn total_profit(&self) -> Money {
        round_display(self.exact_total_profit)
    }
}
