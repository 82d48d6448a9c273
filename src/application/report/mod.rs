//! Derived views over the ordered evaluation stream.
//!
//! - [`scatter`] - per-match profit points for arbitrage matches
//! - [`cumulative`] - running profit total over match order
//! - [`distribution`] - profit multiset with mean and histogram
//! - [`summary`] - final tabular summary

pub mod cumulative;
pub mod distribution;
pub mod scatter;
pub mod summary;

pub use cumulative::{cumulative_profit, CumulativePoint, CumulativeProfit};
pub use distribution::{HistogramBucket, ProfitDistribution};
pub use scatter::{scatter_points, ScatterPoint};
pub use summary::{Summary, SummaryRow};
