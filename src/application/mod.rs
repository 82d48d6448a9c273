//! Application layer: the simulation's use cases over domain types.
//!
//! - [`generator`] - synthetic odds for a sequence of matches
//! - [`evaluator`] - best odds, arbitrage test, stakes and profit
//! - [`stream`] - ordered evaluation with the missing-odds policy
//! - [`report`] - scatter, cumulative, distribution and summary views
//! - [`animation`] - frame-by-frame playback through a renderer
//! - [`simulation`] - the full run

pub mod animation;
pub mod evaluator;
pub mod generator;
pub mod report;
pub mod simulation;
pub mod stream;
