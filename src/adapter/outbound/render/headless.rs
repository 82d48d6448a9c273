//! Non-interactive playback: a progress bar per view instead of charts.
//!
//! Used when animation is disabled, stdout is not a terminal, or output is
//! machine-readable.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::error::Result;
use crate::port::{ChartFrame, ChartRenderer, ChartView, ViewControl};

const TEMPLATE: &str = "  {spinner:.cyan} {msg:<32} [{bar:30.cyan/blue}] {pos}/{len}";

pub struct HeadlessRenderer {
    visible: bool,
    bar: Option<ProgressBar>,
    last_title: Option<String>,
}

impl HeadlessRenderer {
    /// `visible` draws progress bars on stderr; otherwise they are hidden.
    #[must_use]
    pub const fn new(visible: bool) -> Self {
        Self {
            visible,
            bar: None,
            last_title: None,
        }
    }

    /// Title of the last frame rendered.
    #[must_use]
    pub fn last_title(&self) -> Option<&str> {
        self.last_title.as_deref()
    }

    fn progress_bar(&self, frames: usize) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(frames as u64);
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    }
}

impl ChartRenderer for HeadlessRenderer {
    fn begin_view(&mut self, view: ChartView, frames: usize) -> Result<()> {
        let bar = self.progress_bar(frames);
        bar.set_message(view.label());
        self.bar = Some(bar);
        Ok(())
    }

    fn render(&mut self, frame: &ChartFrame<'_>) -> Result<()> {
        let title = frame.title();
        debug!(view = %frame.view(), step = frame.step(), title = %title, "frame");
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        self.last_title = Some(title);
        Ok(())
    }

    fn finish_view(&mut self, view: ChartView) -> Result<ViewControl> {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        debug!(view = %view, title = ?self.last_title, "view finished");
        Ok(ViewControl::Continue)
    }
}
