//! Surebet - sports betting arbitrage simulation.
//!
//! Generates (or loads) two-outcome matches quoted by several bookmakers,
//! finds the matches where backing both outcomes at the best available odds
//! guarantees a profit, and plays the results back as animated terminal
//! charts followed by a summary table.
//!
//! # Architecture
//!
//! - **`domain`** - odds, matches, evaluations and the error taxonomy
//! - **`application`** - generator, evaluator, ordered evaluation stream,
//!   derived reports and the simulation use case
//! - **`port`** - `MatchSource` and `ChartRenderer` traits
//! - **`adapter`** - generated and JSON match sources, terminal and headless
//!   renderers, the CLI
//! - **`infrastructure`** - TOML configuration and logging
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surebet::application::evaluator::evaluate;
//! use surebet::domain::{Match, Odds, Quote};
//!
//! let odds = |v| Odds::try_new(v).unwrap();
//! let fixture = Match::new(
//!     "Match 1",
//!     vec![Quote::new("Bookmaker1", odds(dec!(2.10))), Quote::new("Bookmaker2", odds(dec!(2.05)))],
//!     vec![Quote::new("Bookmaker1", odds(dec!(1.95))), Quote::new("Bookmaker2", odds(dec!(2.00)))],
//! );
//!
//! let evaluation = evaluate(&fixture, dec!(1000)).unwrap();
//! assert!(evaluation.is_arbitrage());
//! assert_eq!(evaluation.profit(), Some(dec!(24.39)));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
