//! Chart widgets for each frame kind.
//!
//! Pure drawing: no terminal setup and no timing, so layouts can be checked
//! against ratatui's `TestBackend`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::application::report::{CumulativePoint, HistogramBucket, ProfitDistribution, ScatterPoint};
use crate::domain::format_amount;
use crate::port::ChartFrame;

const ACCENT_BLUE: Color = Color::Rgb(33, 150, 243);
const ACCENT_GREEN: Color = Color::Rgb(76, 175, 80);
const ACCENT_RED: Color = Color::Rgb(244, 67, 54);
const TEXT_DIM: Color = Color::Rgb(120, 120, 120);

const FOOTER: &str = "any key: next chart   q/esc: skip remaining charts";

/// Draw `frame` over the whole terminal area.
pub fn draw(f: &mut Frame, frame: &ChartFrame<'_>, currency: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Chart
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Footer
        ])
        .split(f.size());

    let title = frame.title();
    let caption = match frame {
        ChartFrame::Scatter { step, points } => {
            draw_scatter(f, chunks[0], &title, *step, points);
            scatter_caption(points, currency)
        }
        ChartFrame::Cumulative { step, points } => {
            draw_cumulative(f, chunks[0], &title, *step, points, currency);
            cumulative_caption(points, currency)
        }
        ChartFrame::Distribution {
            distribution,
            buckets,
            ..
        } => {
            draw_distribution(f, chunks[0], &title, buckets, currency);
            distribution_caption(distribution, currency)
        }
    };

    f.render_widget(Paragraph::new(caption), chunks[1]);
    f.render_widget(
        Paragraph::new(Span::styled(FOOTER, Style::default().fg(TEXT_DIM))),
        chunks[2],
    );
}

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
}

fn waiting(f: &mut Frame, area: Rect, title: &str) {
    let text = Paragraph::new(Span::styled(
        "Waiting for the first arbitrage opportunity...",
        Style::default().fg(TEXT_DIM),
    ))
    .block(chart_block(title));
    f.render_widget(text, area);
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Y bounds that always include zero, padded so points are not drawn on
/// the border.
fn y_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = if hi - lo > f64::EPSILON {
        (hi - lo) * 0.1
    } else {
        1.0
    };
    [lo - pad, hi + pad]
}

fn axis_labels(bounds: [f64; 2], decimals: usize) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::styled(format!("{v:.decimals$}"), Style::default().fg(TEXT_DIM)))
        .collect()
}

fn draw_scatter(f: &mut Frame, area: Rect, title: &str, step: usize, points: &[ScatterPoint]) {
    if points.is_empty() {
        waiting(f, area, title);
        return;
    }

    let x_bounds = [0.0, (step + 1) as f64];
    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.index as f64, to_f64(p.profit)))
        .collect();
    let zero = [(x_bounds[0], 0.0), (x_bounds[1], 0.0)];
    let y = y_bounds(data.iter().map(|(_, profit)| *profit));

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(TEXT_DIM))
            .data(&zero),
        Dataset::default()
            .name("profit")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(ACCENT_BLUE))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .title("Match")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds, 0)),
        )
        .y_axis(
            Axis::default()
                .title("Profit")
                .bounds(y)
                .labels(axis_labels(y, 2)),
        );
    f.render_widget(chart, area);
}

fn draw_cumulative(
    f: &mut Frame,
    area: Rect,
    title: &str,
    step: usize,
    points: &[CumulativePoint],
    currency: &str,
) {
    let x_bounds = [0.0, (step + 1) as f64];
    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.index as f64, to_f64(p.total)))
        .collect();
    let zero = [(x_bounds[0], 0.0), (x_bounds[1], 0.0)];
    let y = y_bounds(data.iter().map(|(_, total)| *total));

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(TEXT_DIM))
            .data(&zero),
        Dataset::default()
            .name("cumulative")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT_GREEN))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(title))
        .x_axis(
            Axis::default()
                .title("Match Number")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds, 0)),
        )
        .y_axis(
            Axis::default()
                .title(format!("Cumulative Profit ({currency})"))
                .bounds(y)
                .labels(axis_labels(y, 2)),
        );
    f.render_widget(chart, area);
}

fn draw_distribution(
    f: &mut Frame,
    area: Rect,
    title: &str,
    buckets: &[HistogramBucket],
    currency: &str,
) {
    if buckets.is_empty() {
        waiting(f, area, title);
        return;
    }

    let labels: Vec<String> = buckets.iter().map(HistogramBucket::label).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(buckets.iter().map(|b| b.count))
        .collect();

    let slots = u16::try_from(buckets.len()).unwrap_or(u16::MAX).max(1);
    let bar_width = (area.width.saturating_sub(2) / slots).saturating_sub(1).max(1);

    let chart = BarChart::default()
        .block(
            chart_block(title).title(
                Title::from(format!(" Profit per Match ({currency}) ")).position(Position::Bottom),
            ),
        )
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(ACCENT_BLUE))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT_BLUE));
    f.render_widget(chart, area);
}

fn scatter_caption(points: &[ScatterPoint], currency: &str) -> Line<'static> {
    let Some(latest) = points.last() else {
        return Line::from(Span::styled(
            "No arbitrage yet",
            Style::default().fg(TEXT_DIM),
        ));
    };
    Line::from(vec![
        Span::styled(format!("{}  ", latest.match_id), Style::default().fg(TEXT_DIM)),
        Span::raw(latest.odds_label()),
        Span::raw("  profit "),
        Span::styled(
            format!("{currency}{}", format_amount(latest.profit)),
            Style::default().fg(ACCENT_GREEN),
        ),
    ])
}

fn cumulative_caption(points: &[CumulativePoint], currency: &str) -> Line<'static> {
    let total = points.last().map_or(Decimal::ZERO, |p| p.total);
    let color = if total < Decimal::ZERO {
        ACCENT_RED
    } else {
        ACCENT_GREEN
    };
    Line::from(vec![
        Span::styled("Total ", Style::default().fg(TEXT_DIM)),
        Span::styled(
            format!("{currency}{}", format_amount(total)),
            Style::default().fg(color),
        ),
    ])
}

fn distribution_caption(distribution: &ProfitDistribution, currency: &str) -> Line<'static> {
    let Some(mean) = distribution.mean() else {
        return Line::from(Span::styled(
            "No arbitrage yet",
            Style::default().fg(TEXT_DIM),
        ));
    };
    Line::from(vec![
        Span::styled("Mean: ", Style::default().fg(TEXT_DIM)),
        Span::styled(
            format!("{currency}{}", format_amount(mean)),
            Style::default().fg(ACCENT_RED),
        ),
        Span::styled(
            format!("  n = {}", distribution.len()),
            Style::default().fg(TEXT_DIM),
        ),
    ])
}
