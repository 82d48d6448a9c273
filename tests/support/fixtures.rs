use rust_decimal::Decimal;

use surebet::domain::{Match, Odds, Quote};
use surebet::error::Result;
use surebet::port::MatchSource;

pub fn odds(value: Decimal) -> Odds {
    Odds::try_new(value).expect("valid odds")
}

/// Quotes numbered `Bookmaker1`, `Bookmaker2`, ... in the given order.
pub fn book(values: &[Decimal]) -> Vec<Quote> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Quote::new(format!("Bookmaker{}", i + 1), odds(*v)))
        .collect()
}

pub fn fixture(id: &str, team_a: &[Decimal], team_b: &[Decimal]) -> Match {
    Match::new(id, book(team_a), book(team_b))
}

/// Match source returning a fixed list.
pub struct FixedSource(pub Vec<Match>);

impl MatchSource for FixedSource {
    fn describe(&self) -> String {
        "fixed".to_string()
    }

    fn load(&mut self) -> Result<Vec<Match>> {
        Ok(self.0.clone())
    }
}
