//! Simulation parameters.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::generator::GeneratorParams;
use crate::application::stream::MissingOddsPolicy;
use crate::domain::{BookmakerId, Money};
use crate::error::ConfigError;

/// `[simulation]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of generated matches.
    pub num_matches: usize,
    /// Amount spread across both outcomes of every match.
    pub investment: Money,
    /// Lower bound for generated odds (exclusive of 1).
    pub odds_low: Decimal,
    /// Upper bound for generated odds.
    pub odds_high: Decimal,
    /// Bookmakers quoting every outcome.
    pub bookmakers: Vec<String>,
    /// Seed for reproducible odds. Entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub on_missing_odds: MissingOddsPolicy,
    /// Currency label shown beside amounts.
    pub currency: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let params = GeneratorParams::default();
        Self {
            num_matches: params.num_matches,
            investment: Decimal::from(1000),
            odds_low: params.odds_low,
            odds_high: params.odds_high,
            bookmakers: params
                .bookmakers
                .iter()
                .map(|b| b.as_str().to_string())
                .collect(),
            seed: None,
            on_missing_odds: MissingOddsPolicy::default(),
            currency: "₹".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Generator parameters described by this section.
    #[must_use]
    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams {
            num_matches: self.num_matches,
            odds_low: self.odds_low,
            odds_high: self.odds_high,
            bookmakers: self.bookmakers.iter().map(BookmakerId::new).collect(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.investment <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "investment",
                reason: "must be greater than 0".to_string(),
            });
        }
        self.generator_params().validate()?;

        let mut seen = HashSet::new();
        for bookmaker in &self.bookmakers {
            if bookmaker.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "bookmakers",
                    reason: "bookmaker names must not be empty".to_string(),
                });
            }
            if !seen.insert(bookmaker.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "bookmakers",
                    reason: format!("duplicate bookmaker '{bookmaker}'"),
                });
            }
        }

        if self.currency.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "currency",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
