//! Chart renderers.
//!
//! - [`terminal`] - ratatui charts on the alternate screen
//! - [`headless`] - progress bars only, for non-interactive runs
//! - [`chart`] - the widgets both the terminal renderer and tests draw

pub mod chart;
pub mod headless;
pub mod terminal;

pub use headless::HeadlessRenderer;
pub use terminal::TerminalRenderer;
