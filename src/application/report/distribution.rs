//! Profit distribution across arbitrage matches.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::stream::MatchReport;
use crate::domain::{round_display, Money};

/// One equal-width histogram bucket, `[lower, upper)` except the last which
/// is closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub lower: Money,
    pub upper: Money,
    pub count: u64,
}

impl HistogramBucket {
    /// Short axis label: the bucket's lower bound rounded for display.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}", round_display(self.lower))
    }
}

/// Unordered collection of arbitrage profits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfitDistribution {
    profits: Vec<Money>,
}

impl ProfitDistribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the profit of every arbitrage match in `reports`.
    #[must_use]
    pub fn from_reports(reports: &[MatchReport]) -> Self {
        let mut distribution = Self::new();
        for report in reports {
            distribution.record(report);
        }
        distribution
    }

    /// Add the report's profit if it is an arbitrage; returns whether it was added.
    pub fn record(&mut self, report: &MatchReport) -> bool {
        match report.evaluation().and_then(|e| e.arbitrage()) {
            Some(arbitrage) => {
                self.profits.push(arbitrage.exact_profit());
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, profit: Money) {
        self.profits.push(profit);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profits.is_empty()
    }

    #[must_use]
    pub fn profits(&self) -> &[Money] {
        &self.profits
    }

    #[must_use]
    pub fn total(&self) -> Money {
        self.profits
            .iter()
            .fold(Decimal::ZERO, |total, profit| total.saturating_add(*profit))
    }

    /// Arithmetic mean, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<Money> {
        if self.profits.is_empty() {
            return None;
        }
        Some(self.total() / Decimal::from(self.profits.len()))
    }

    #[must_use]
    pub fn min(&self) -> Option<Money> {
        self.profits.iter().copied().min()
    }

    #[must_use]
    pub fn max(&self) -> Option<Money> {
        self.profits.iter().copied().max()
    }

    /// Split `[min, max]` into `bins` equal-width buckets and count profits.
    ///
    /// Returns no buckets when empty or `bins == 0`, and a single bucket when
    /// every profit is identical.
    #[must_use]
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBucket> {
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return Vec::new();
        };
        if bins == 0 {
            return Vec::new();
        }
        if min == max {
            return vec![HistogramBucket {
                lower: min,
                upper: max,
                count: self.profits.len() as u64,
            }];
        }

        let width = (max - min) / Decimal::from(bins);
        let mut buckets: Vec<HistogramBucket> = (0..bins)
            .map(|i| {
                let lower = min + width * Decimal::from(i);
                let upper = if i + 1 == bins { max } else { lower + width };
                HistogramBucket {
                    lower,
                    upper,
                    count: 0,
                }
            })
            .collect();

        for profit in &self.profits {
            let slot = ((*profit - min) / width)
                .floor()
                .to_usize()
                .unwrap_or(0)
                .min(bins - 1);
            buckets[slot].count += 1;
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn distribution(profits: &[Decimal]) -> ProfitDistribution {
        let mut d = ProfitDistribution::new();
        for p in profits {
            d.push(*p);
        }
        d
    }

    #[test]
    fn empty_distribution_has_no_mean_or_buckets() {
        let d = ProfitDistribution::new();
        assert!(d.is_empty());
        assert_eq!(d.mean(), None);
        assert!(d.histogram(15).is_empty());
    }

    #[test]
    fn mean_and_total() {
        let d = distribution(&[dec!(10), dec!(20), dec!(30)]);
        assert_eq!(d.total(), dec!(60));
        assert_eq!(d.mean(), Some(dec!(20)));
    }

    #[test]
    fn histogram_counts_every_profit_once() {
        let d = distribution(&[dec!(0), dec!(1), dec!(2.5), dec!(9.99), dec!(10)]);
        let buckets = d.histogram(5);

        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<u64>(), 5);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[4].count, 2);
        assert_eq!(buckets[0].lower, dec!(0));
        assert_eq!(buckets[4].upper, dec!(10));
    }

    #[test]
    fn identical_profits_collapse_to_one_bucket() {
        let d = distribution(&[dec!(12.5), dec!(12.5)]);
        let buckets = d.histogram(15);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].label(), "12.50");
    }
}
