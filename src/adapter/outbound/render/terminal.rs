//! Full-screen animated charts on the terminal.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use super::chart;
use crate::error::Result;
use crate::port::{ChartFrame, ChartRenderer, ChartView, ViewControl};

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Key press outcome while waiting between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    None,
    Next,
    Quit,
}

/// Initialize terminal for full-screen drawing.
fn init_terminal() -> io::Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal state.
fn restore_terminal(terminal: &mut TuiTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Wait up to `timeout` for a key press.
fn wait_for_key(timeout: Duration) -> io::Result<KeyAction> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(KeyAction::None);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key.code {
                KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    KeyAction::Quit
                }
                _ => KeyAction::Next,
            });
        }
    }
}

/// Draws each view full screen on the alternate screen.
///
/// The terminal is taken over on the first `begin_view` and handed back
/// when playback quits, on [`TerminalRenderer::close`], or on drop.
pub struct TerminalRenderer {
    terminal: Option<TuiTerminal>,
    currency: String,
    delay: Duration,
    linger: Duration,
    frames: usize,
    skip_frames: bool,
    quit: bool,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(currency: impl Into<String>, delay: Duration, linger: Duration) -> Self {
        Self {
            terminal: None,
            currency: currency.into(),
            delay,
            linger,
            frames: 0,
            skip_frames: false,
            quit: false,
        }
    }

    fn terminal(&mut self) -> Result<&mut TuiTerminal> {
        if self.terminal.is_none() {
            debug!("entering alternate screen");
            self.terminal = Some(init_terminal()?);
        }
        self.terminal
            .as_mut()
            .ok_or_else(|| crate::error::Error::Render("terminal unavailable".to_string()))
    }

    /// Hand the terminal back to the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be left.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            debug!("leaving alternate screen");
            restore_terminal(&mut terminal)?;
        }
        Ok(())
    }
}

impl ChartRenderer for TerminalRenderer {
    fn begin_view(&mut self, view: ChartView, frames: usize) -> Result<()> {
        debug!(view = %view, frames, "terminal view started");
        self.frames = frames;
        self.skip_frames = false;
        self.terminal()?.clear()?;
        Ok(())
    }

    fn render(&mut self, frame: &ChartFrame<'_>) -> Result<()> {
        if self.quit {
            return Ok(());
        }
        // Any key fast-forwards to the last frame of the view.
        let last = frame.step() >= self.frames;
        if self.skip_frames && !last {
            return Ok(());
        }
        let currency = self.currency.clone();
        self.terminal()?
            .draw(|f| chart::draw(f, frame, &currency))?;

        if last {
            return Ok(());
        }
        match wait_for_key(self.delay)? {
            KeyAction::None => {}
            KeyAction::Next => self.skip_frames = true,
            KeyAction::Quit => self.quit = true,
        }
        Ok(())
    }

    fn finish_view(&mut self, view: ChartView) -> Result<ViewControl> {
        if !self.quit && wait_for_key(self.linger)? == KeyAction::Quit {
            self.quit = true;
        }
        debug!(view = %view, quit = self.quit, "terminal view finished");

        if self.quit {
            self.close()?;
            return Ok(ViewControl::Quit);
        }
        Ok(ViewControl::Continue)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}
