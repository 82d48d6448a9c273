//! Synthetic odds generation.
//!
//! Produces `num_matches` matches named `Match 1` .. `Match N`, each outcome
//! quoted by every configured bookmaker with odds drawn uniformly from
//! `[odds_low, odds_high]` and rounded to 2 decimal places.

use rand::Rng;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{round_display, BookmakerId, DomainError, Match, MatchId, Odds, Quote};

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    pub num_matches: usize,
    pub odds_low: Decimal,
    pub odds_high: Decimal,
    pub bookmakers: Vec<BookmakerId>,
}

impl GeneratorParams {
    /// Check the parameter invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] when `num_matches` is 0,
    /// `odds_low <= 1`, `odds_low >= odds_high`, or no bookmakers are given.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_matches == 0 {
            return Err(DomainError::invalid(
                "num_matches",
                "must be greater than 0",
            ));
        }
        if self.odds_low <= Decimal::ONE {
            return Err(DomainError::invalid(
                "odds_low",
                format!("must be greater than 1, got {}", self.odds_low),
            ));
        }
        if self.odds_low >= self.odds_high {
            return Err(DomainError::invalid(
                "odds_high",
                format!(
                    "must be greater than odds_low ({} >= {})",
                    self.odds_low, self.odds_high
                ),
            ));
        }
        if self.bookmakers.is_empty() {
            return Err(DomainError::invalid(
                "bookmakers",
                "at least one bookmaker is required",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_matches: 100,
            odds_low: Decimal::new(18, 1),
            odds_high: Decimal::new(22, 1),
            bookmakers: vec![
                BookmakerId::from("Bookmaker1"),
                BookmakerId::from("Bookmaker2"),
            ],
        }
    }
}

/// Generate matches in order `Match 1` .. `Match N` from `rng`.
///
/// Output depends only on `params` and the state of `rng`, so a seeded
/// generator reproduces the same matches.
///
/// # Errors
///
/// Returns [`DomainError::InvalidParameter`] if `params` fail validation.
/// Nothing is generated in that case.
pub fn generate<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Vec<Match>, DomainError> {
    params.validate()?;

    let sampler = OddsSampler::new(params.odds_low, params.odds_high)?;
    let mut matches = Vec::with_capacity(params.num_matches);

    for n in 1..=params.num_matches {
        let mut book = || -> Result<Vec<Quote>, DomainError> {
            params
                .bookmakers
                .iter()
                .map(|bookmaker| {
                    sampler
                        .sample(rng)
                        .map(|odds| Quote::new(bookmaker.clone(), odds))
                })
                .collect()
        };
        let team_a = book()?;
        let team_b = book()?;
        matches.push(Match::new(MatchId::numbered(n), team_a, team_b));
    }

    debug!(
        matches = matches.len(),
        bookmakers = params.bookmakers.len(),
        "Generated matches"
    );

    Ok(matches)
}

/// Uniform sampler over an odds range.
struct OddsSampler {
    low: Decimal,
    high: Decimal,
    low_f: f64,
    high_f: f64,
}

impl OddsSampler {
    fn new(low: Decimal, high: Decimal) -> Result<Self, DomainError> {
        let to_f64 = |name: &'static str, value: Decimal| {
            value
                .to_f64()
                .ok_or_else(|| DomainError::invalid(name, format!("{value} is not representable")))
        };
        Ok(Self {
            low,
            high,
            low_f: to_f64("odds_low", low)?,
            high_f: to_f64("odds_high", high)?,
        })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Odds, DomainError> {
        let raw = rng.gen_range(self.low_f..=self.high_f);
        let value = Decimal::from_f64(raw)
            .ok_or_else(|| DomainError::invalid("odds", format!("{raw} is not representable")))?;
        // Rounding may step just outside bounds with more than 2 decimals.
        Odds::try_new(round_display(value).clamp(self.low, self.high))
    }
}
