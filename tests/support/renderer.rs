use rust_decimal::Decimal;

use surebet::error::Result;
use surebet::port::{ChartFrame, ChartRenderer, ChartView, ViewControl};

/// Renderer that records what it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub views: Vec<(ChartView, usize)>,
    pub titles: Vec<String>,
    /// Exact running totals from the final cumulative frame.
    pub cumulative: Vec<Decimal>,
    /// Profits in the final distribution frame.
    pub distribution: Vec<Decimal>,
    pub quit_after: Option<ChartView>,
}

impl ChartRenderer for RecordingRenderer {
    fn begin_view(&mut self, view: ChartView, frames: usize) -> Result<()> {
        self.views.push((view, frames));
        Ok(())
    }

    fn render(&mut self, frame: &ChartFrame<'_>) -> Result<()> {
        match frame {
            ChartFrame::Cumulative { points, .. } => {
                self.cumulative = points.iter().map(|p| p.total).collect();
            }
            ChartFrame::Distribution { distribution, .. } => {
                self.distribution = distribution.profits().to_vec();
            }
            ChartFrame::Scatter { .. } => {}
        }
        self.titles.push(frame.title());
        Ok(())
    }

    fn finish_view(&mut self, view: ChartView) -> Result<ViewControl> {
        if self.quit_after == Some(view) {
            return Ok(ViewControl::Quit);
        }
        Ok(ViewControl::Continue)
    }
}
