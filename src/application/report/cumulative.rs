//! Running profit total over match order.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::stream::MatchReport;
use crate::domain::{round_display, Money};

/// Running total after a given match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CumulativePoint {
    pub index: usize,
    /// Exact running total; round with [`CumulativePoint::display_total`].
    pub total: Money,
}

impl CumulativePoint {
    #[must_use]
    pub fn display_total(&self) -> Money {
        round_display(self.total)
    }
}

/// Prefix sum of per-match profit, one point per match.
///
/// Non-arbitrage and skipped matches contribute zero. Sums use exact
/// profits so rounding error does not compound over long runs.
pub struct CumulativeProfit<I> {
    reports: I,
    total: Money,
}

impl<I> CumulativeProfit<I> {
    pub const fn new(reports: I) -> Self {
        Self {
            reports,
            total: Decimal::ZERO,
        }
    }
}

impl<'a, I> Iterator for CumulativeProfit<I>
where
    I: Iterator<Item = &'a MatchReport>,
{
    type Item = CumulativePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let report = self.reports.next()?;
        self.total = self
            .total
            .saturating_add(report.exact_profit_or(Decimal::ZERO));
        Some(CumulativePoint {
            index: report.index(),
            total: self.total,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.reports.size_hint()
    }
}

/// Cumulative profit over `reports`, starting from zero.
pub fn cumulative_profit(reports: &[MatchReport]) -> CumulativeProfit<std::slice::Iter<'_, MatchReport>> {
    CumulativeProfit::new(reports.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::evaluator::Evaluator;
    use crate::application::stream::{evaluate_all, MissingOddsPolicy};
    use crate::domain::{Match, Odds, Quote};
    use rust_decimal_macros::dec;

    fn quote(value: Decimal) -> Quote {
        Quote::new("Bookmaker1", Odds::try_new(value).unwrap())
    }

    fn reports() -> Vec<MatchReport> {
        let fixtures = vec![
            Match::new("Match 1", vec![quote(dec!(2.10))], vec![quote(dec!(2.00))]),
            Match::new("Match 2", vec![quote(dec!(1.90))], vec![quote(dec!(1.90))]),
            Match::new("Match 3", vec![quote(dec!(2.20))], vec![quote(dec!(2.00))]),
        ];
        let evaluator = Evaluator::new(dec!(1000)).unwrap();
        evaluate_all(&fixtures, &evaluator, MissingOddsPolicy::Skip).unwrap()
    }

    #[test]
    fn equals_prefix_sums_of_profit() {
        let reports = reports();
        let points: Vec<_> = cumulative_profit(&reports).collect();

        let mut expected = Decimal::ZERO;
        for (point, report) in points.iter().zip(&reports) {
            expected += report.exact_profit_or(Decimal::ZERO);
            assert_eq!(point.total, expected);
            assert_eq!(point.index, report.index());
        }
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].total, points[1].total);
    }

    #[test]
    fn restarts_from_zero_each_time() {
        let reports = reports();
        let first: Vec<_> = cumulative_profit(&reports).collect();
        let second: Vec<_> = cumulative_profit(&reports).collect();
        assert_eq!(first, second);
        assert_eq!(first[0].display_total(), dec!(24.39));
    }
}
