//! Rendering collaborator port.
//!
//! The simulation feeds each view one frame per processed match. A frame
//! borrows the prefix of the derived series computed so far, so renderers
//! never re-evaluate anything.

use std::fmt;

use crate::application::report::{CumulativePoint, HistogramBucket, ProfitDistribution, ScatterPoint};
use crate::error::Result;

/// The three animated charts, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartView {
    Scatter,
    Cumulative,
    Distribution,
}

impl ChartView {
    pub const ALL: [Self; 3] = [Self::Scatter, Self::Cumulative, Self::Distribution];

    /// Human label, e.g. for "Animating arbitrage profit scatter plot...".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scatter => "arbitrage profit scatter plot",
            Self::Cumulative => "cumulative profit line chart",
            Self::Distribution => "profit distribution histogram",
        }
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether playback should move on to the next view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewControl {
    Continue,
    /// The operator asked to skip the remaining views.
    Quit,
}

/// State of one chart after `step` matches have been processed.
#[derive(Debug, Clone, Copy)]
pub enum ChartFrame<'a> {
    Scatter {
        step: usize,
        /// Arbitrage matches seen so far.
        points: &'a [ScatterPoint],
    },
    Cumulative {
        step: usize,
        /// One running total per processed match.
        points: &'a [CumulativePoint],
    },
    Distribution {
        step: usize,
        distribution: &'a ProfitDistribution,
        buckets: &'a [HistogramBucket],
    },
}

impl ChartFrame<'_> {
    #[must_use]
    pub const fn view(&self) -> ChartView {
        match self {
            Self::Scatter { .. } => ChartView::Scatter,
            Self::Cumulative { .. } => ChartView::Cumulative,
            Self::Distribution { .. } => ChartView::Distribution,
        }
    }

    /// Number of matches processed when this frame was taken.
    #[must_use]
    pub const fn step(&self) -> usize {
        match self {
            Self::Scatter { step, .. }
            | Self::Cumulative { step, .. }
            | Self::Distribution { step, .. } => *step,
        }
    }

    /// Whether any arbitrage has been seen up to this frame.
    #[must_use]
    pub fn has_arbitrage(&self) -> bool {
        match self {
            Self::Scatter { points, .. } => !points.is_empty(),
            Self::Cumulative { points, .. } => points.iter().any(|p| !p.total.is_zero()),
            Self::Distribution { distribution, .. } => !distribution.is_empty(),
        }
    }

    /// Chart title for this frame.
    #[must_use]
    pub fn title(&self) -> String {
        let step = self.step();
        match self {
            Self::Scatter { points, .. } if points.is_empty() => {
                format!("Arbitrage Profit Scatter (No arbitrage found till match {step})")
            }
            Self::Scatter { points, .. } => {
                format!("Arbitrage Profit Scatter (Matches with arbitrage: {})", points.len())
            }
            Self::Cumulative { .. } => format!("Cumulative Profit (After {step} Matches)"),
            Self::Distribution { distribution, .. } if distribution.is_empty() => {
                format!("Profit Distribution (No arbitrage found till match {step})")
            }
            Self::Distribution { .. } => format!("Profit Distribution (After {step} Matches)"),
        }
    }
}

/// Draws animated charts.
///
/// Called as `begin_view`, then `render` once per processed match, then
/// `finish_view`. A renderer that returns [`ViewControl::Quit`] from
/// `finish_view` gets no further views.
pub trait ChartRenderer {
    /// Prepare for a view with `frames` frames.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device cannot be set up.
    fn begin_view(&mut self, view: ChartView, frames: usize) -> Result<()>;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, frame: &ChartFrame<'_>) -> Result<()>;

    /// Close the view once its last frame is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device cannot be restored.
    fn finish_view(&mut self, view: ChartView) -> Result<ViewControl>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report::CumulativePoint;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn scatter_title_reports_missing_arbitrage() {
        let frame = ChartFrame::Scatter {
            step: 7,
            points: &[],
        };
        assert_eq!(
            frame.title(),
            "Arbitrage Profit Scatter (No arbitrage found till match 7)"
        );
        assert!(!frame.has_arbitrage());
    }

    #[test]
    fn cumulative_title_counts_matches() {
        let points = [
            CumulativePoint {
                index: 1,
                total: Decimal::ZERO,
            },
            CumulativePoint {
                index: 2,
                total: dec!(24.39),
            },
        ];
        let frame = ChartFrame::Cumulative {
            step: 2,
            points: &points,
        };
        assert_eq!(frame.title(), "Cumulative Profit (After 2 Matches)");
        assert_eq!(frame.view(), ChartView::Cumulative);
        assert!(frame.has_arbitrage());
    }

    #[test]
    fn distribution_title_depends_on_profits() {
        let empty = ProfitDistribution::new();
        let frame = ChartFrame::Distribution {
            step: 3,
            distribution: &empty,
            buckets: &[],
        };
        assert_eq!(
            frame.title(),
            "Profit Distribution (No arbitrage found till match 3)"
        );

        let mut filled = ProfitDistribution::new();
        filled.push(dec!(12.5));
        let buckets = filled.histogram(15);
        let frame = ChartFrame::Distribution {
            step: 4,
            distribution: &filled,
            buckets: &buckets,
        };
        assert_eq!(frame.title(), "Profit Distribution (After 4 Matches)");
    }
}
