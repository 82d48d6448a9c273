//! Lazy, ordered evaluation of a match sequence.
//!
//! Every downstream view consumes [`MatchReport`]s in generation order. How a
//! match with missing odds is treated is decided here, once, by
//! [`MissingOddsPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::evaluator::Evaluator;
use crate::domain::{DomainError, Evaluation, Match, MatchId, Money};

/// What to do with a match that cannot be evaluated: an outcome with no
/// bookmaker odds, or amounts outside the decimal range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingOddsPolicy {
    /// Report the match as skipped (no arbitrage, zero profit) and continue.
    #[default]
    Skip,
    /// Stop the whole run with the evaluation error.
    Abort,
}

impl MissingOddsPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for MissingOddsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingOddsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown policy '{other}' (expected skip or abort)")),
        }
    }
}

/// Per-match evaluation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationStatus {
    Evaluated(Evaluation),
    /// The match could not be evaluated and was skipped under
    /// [`MissingOddsPolicy::Skip`].
    Skipped(DomainError),
}

/// One match's place in the run and its evaluation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    index: usize,
    match_id: MatchId,
    status: EvaluationStatus,
}

impl MatchReport {
    pub const fn new(index: usize, match_id: MatchId, status: EvaluationStatus) -> Self {
        Self {
            index,
            match_id,
            status,
        }
    }

    /// 1-based position in generation order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    #[must_use]
    pub const fn status(&self) -> &EvaluationStatus {
        &self.status
    }

    /// The evaluation, unless the match was skipped.
    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        match &self.status {
            EvaluationStatus::Evaluated(evaluation) => Some(evaluation),
            EvaluationStatus::Skipped(_) => None,
        }
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, EvaluationStatus::Skipped(_))
    }

    #[must_use]
    pub fn is_arbitrage(&self) -> bool {
        self.evaluation().is_some_and(Evaluation::is_arbitrage)
    }

    /// Exact profit, with skipped and non-arbitrage matches counting as `default`.
    #[must_use]
    pub fn exact_profit_or(&self, default: Money) -> Money {
        self.evaluation()
            .map_or(default, |evaluation| evaluation.exact_profit_or(default))
    }
}

/// Iterator evaluating matches one at a time, in order.
///
/// Yields `Err` at most once: under [`MissingOddsPolicy::Abort`] the first
/// missing-odds error ends the stream.
pub struct EvaluationStream<'a, I> {
    matches: I,
    evaluator: &'a Evaluator,
    policy: MissingOddsPolicy,
    index: usize,
    done: bool,
}

impl<'a, I> EvaluationStream<'a, I>
where
    I: Iterator<Item = &'a Match>,
{
    pub fn new(
        matches: impl IntoIterator<IntoIter = I>,
        evaluator: &'a Evaluator,
        policy: MissingOddsPolicy,
    ) -> Self {
        Self {
            matches: matches.into_iter(),
            evaluator,
            policy,
            index: 0,
            done: false,
        }
    }
}

impl<'a, I> Iterator for EvaluationStream<'a, I>
where
    I: Iterator<Item = &'a Match>,
{
    type Item = Result<MatchReport, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let fixture = self.matches.next()?;
        self.index += 1;

        let status = match self.evaluator.evaluate(fixture) {
            Ok(evaluation) => EvaluationStatus::Evaluated(evaluation),
            Err(err) => match self.policy {
                MissingOddsPolicy::Skip => {
                    warn!(match_id = %fixture.id(), error = %err, "Skipping match");
                    EvaluationStatus::Skipped(err)
                }
                MissingOddsPolicy::Abort => {
                    self.done = true;
                    return Some(Err(err));
                }
            },
        };

        Some(Ok(MatchReport::new(
            self.index,
            fixture.id().clone(),
            status,
        )))
    }
}

/// Evaluate every match in order and collect the reports.
///
/// # Errors
///
/// Returns the first [`DomainError::MissingOddsData`] under
/// [`MissingOddsPolicy::Abort`].
pub fn evaluate_all(
    matches: &[Match],
    evaluator: &Evaluator,
    policy: MissingOddsPolicy,
) -> Result<Vec<MatchReport>, DomainError> {
    EvaluationStream::new(matches, evaluator, policy).collect()
}
