//! Bookmaker-agnostic domain types: matches, odds and evaluation results.

pub mod error;
pub mod evaluation;
pub mod fixture;
pub mod id;
pub mod odds;
pub mod outcome;

pub use error::DomainError;
pub use evaluation::{Arbitrage, Evaluation};
pub use fixture::{Match, Quote};
pub use id::{BookmakerId, MatchId};
pub use odds::{format_amount, round_display, Money, Odds, Probability, DISPLAY_DP};
pub use outcome::{Outcome, OutcomePair};
