//! Frame driver for the three animated views.
//!
//! Each view replays the evaluated matches in order and hands the renderer
//! one [`ChartFrame`] per match. Derived series grow incrementally, so a
//! frame only ever borrows what has been computed so far.

use tracing::{debug, info};

use super::report::{cumulative_profit, CumulativePoint, ProfitDistribution, ScatterPoint};
use super::stream::MatchReport;
use crate::error::Result;
use crate::port::{ChartFrame, ChartRenderer, ChartView, ViewControl};

/// What happened during playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playback {
    pub views_played: usize,
    pub frames_rendered: usize,
    /// The renderer asked to skip the remaining views.
    pub stopped_early: bool,
}

/// Play every view over `reports` through `renderer`.
///
/// # Errors
///
/// Propagates renderer failures.
pub fn animate<R>(reports: &[MatchReport], renderer: &mut R, bins: usize) -> Result<Playback>
where
    R: ChartRenderer + ?Sized,
{
    let mut playback = Playback::default();
    if reports.is_empty() {
        debug!("no matches to animate");
        return Ok(playback);
    }

    for view in ChartView::ALL {
        info!(view = %view, frames = reports.len(), "animating view");
        renderer.begin_view(view, reports.len())?;
        playback.frames_rendered += match view {
            ChartView::Scatter => play_scatter(reports, renderer)?,
            ChartView::Cumulative => play_cumulative(reports, renderer)?,
            ChartView::Distribution => play_distribution(reports, renderer, bins)?,
        };
        playback.views_played += 1;

        if renderer.finish_view(view)? == ViewControl::Quit {
            info!(view = %view, "playback stopped by operator");
            playback.stopped_early = true;
            break;
        }
    }

    Ok(playback)
}

fn play_scatter<R: ChartRenderer + ?Sized>(reports: &[MatchReport], renderer: &mut R) -> Result<usize> {
    let mut points: Vec<ScatterPoint> = Vec::new();
    for (i, report) in reports.iter().enumerate() {
        if let Some(point) = ScatterPoint::from_report(report) {
            points.push(point);
        }
        renderer.render(&ChartFrame::Scatter {
            step: i + 1,
            points: &points,
        })?;
    }
    Ok(reports.len())
}

fn play_cumulative<R: ChartRenderer + ?Sized>(reports: &[MatchReport], renderer: &mut R) -> Result<usize> {
    let series: Vec<CumulativePoint> = cumulative_profit(reports).collect();
    for step in 1..=series.len() {
        renderer.render(&ChartFrame::Cumulative {
            step,
            points: &series[..step],
        })?;
    }
    Ok(series.len())
}

fn play_distribution<R: ChartRenderer + ?Sized>(
    reports: &[MatchReport],
    renderer: &mut R,
    bins: usize,
) -> Result<usize> {
    let mut distribution = ProfitDistribution::new();
    for (i, report) in reports.iter().enumerate() {
        distribution.record(report);
        let buckets = distribution.histogram(bins);
        renderer.render(&ChartFrame::Distribution {
            step: i + 1,
            distribution: &distribution,
            buckets: &buckets,
        })?;
    }
    Ok(reports.len())
}
