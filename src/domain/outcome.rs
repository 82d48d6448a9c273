//! The two outcomes of a match and a pair container keyed by them.
//!
//! Outcomes are an explicit ordered pair rather than map keys, so "Team A"
//! always comes first in tables, charts and iteration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two outcomes of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Team A")]
    TeamA,
    #[serde(rename = "Team B")]
    TeamB,
}

impl Outcome {
    /// Both outcomes in display order.
    pub const ALL: [Outcome; 2] = [Outcome::TeamA, Outcome::TeamB];

    /// Human-readable outcome name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamA => "Team A",
            Self::TeamB => "Team B",
        }
    }

    /// Single-letter tag used in compact chart annotations.
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::TeamA => "A",
            Self::TeamB => "B",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for each outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomePair<T> {
    #[serde(rename = "Team A")]
    pub team_a: T,
    #[serde(rename = "Team B")]
    pub team_b: T,
}

impl<T> OutcomePair<T> {
    pub const fn new(team_a: T, team_b: T) -> Self {
        Self { team_a, team_b }
    }

    /// Build a pair by calling `f` once per outcome, Team A first.
    pub fn from_fn(mut f: impl FnMut(Outcome) -> T) -> Self {
        let team_a = f(Outcome::TeamA);
        let team_b = f(Outcome::TeamB);
        Self { team_a, team_b }
    }

    /// Fallible variant of [`OutcomePair::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Outcome) -> Result<T, E>) -> Result<Self, E> {
        let team_a = f(Outcome::TeamA)?;
        let team_b = f(Outcome::TeamB)?;
        Ok(Self { team_a, team_b })
    }

    #[must_use]
    pub const fn get(&self, outcome: Outcome) -> &T {
        match outcome {
            Outcome::TeamA => &self.team_a,
            Outcome::TeamB => &self.team_b,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> OutcomePair<U> {
        OutcomePair {
            team_a: f(&self.team_a),
            team_b: f(&self.team_b),
        }
    }

    /// Iterate `(outcome, value)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, &T)> {
        [
            (Outcome::TeamA, &self.team_a),
            (Outcome::TeamB, &self.team_b),
        ]
        .into_iter()
    }

    /// Iterate the values in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        [&self.team_a, &self.team_b].into_iter()
    }
}
