//! Simulation use case: load matches, evaluate them once, play the views,
//! and summarise.

use tracing::info;

use super::animation::{animate, Playback};
use super::evaluator::Evaluator;
use super::report::Summary;
use super::stream::{evaluate_all, MatchReport, MissingOddsPolicy};
use crate::domain::{DomainError, Money};
use crate::error::Result;
use crate::port::{ChartRenderer, MatchSource};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub reports: Vec<MatchReport>,
    pub summary: Summary,
    pub playback: Playback,
}

/// A configured simulation run.
#[derive(Debug, Clone)]
pub struct Simulation {
    evaluator: Evaluator,
    policy: MissingOddsPolicy,
    histogram_bins: usize,
}

impl Simulation {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidParameter`] for a non-positive
    /// investment or zero histogram bins.
    pub fn new(
        investment: Money,
        policy: MissingOddsPolicy,
        histogram_bins: usize,
    ) -> std::result::Result<Self, DomainError> {
        if histogram_bins == 0 {
            return Err(DomainError::invalid("histogram_bins", "must be greater than 0"));
        }
        Ok(Self {
            evaluator: Evaluator::new(investment)?,
            policy,
            histogram_bins,
        })
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[must_use]
    pub const fn policy(&self) -> MissingOddsPolicy {
        self.policy
    }

    /// Load, evaluate, animate and summarise.
    ///
    /// Matches are evaluated before anything is drawn, so an aborting
    /// missing-odds policy fails the run with no frames rendered.
    ///
    /// # Errors
    ///
    /// Source, evaluation and renderer failures abort the run.
    pub fn run<S, R>(&self, source: &mut S, renderer: &mut R) -> Result<SimulationReport>
    where
        S: MatchSource + ?Sized,
        R: ChartRenderer + ?Sized,
    {
        let matches = source.load()?;
        info!(source = %source.describe(), matches = matches.len(), "matches loaded");

        let reports = evaluate_all(&matches, &self.evaluator, self.policy)?;
        let summary = Summary::from_reports(&reports);
        info!(
            matches = summary.matches,
            arbitrage = summary.arbitrage_count(),
            skipped = summary.skipped,
            total_profit = %summary.total_profit(),
            "evaluation complete"
        );

        let playback = animate(&reports, renderer, self.histogram_bins)?;

        Ok(SimulationReport {
            reports,
            summary,
            playback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Match, Odds, Quote};
    use crate::error::Error;
    use crate::port::{ChartFrame, ChartView, ViewControl};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct Fixed(Vec<Match>);

    impl MatchSource for Fixed {
        fn describe(&self) -> String {
            "fixed".into()
        }

        fn load(&mut self) -> Result<Vec<Match>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct Counting {
        frames: usize,
    }

    impl ChartRenderer for Counting {
        fn begin_view(&mut self, _view: ChartView, _frames: usize) -> Result<()> {
            Ok(())
        }

        fn render(&mut self, _frame: &ChartFrame<'_>) -> Result<()> {
            self.frames += 1;
            Ok(())
        }

        fn finish_view(&mut self, _view: ChartView) -> Result<ViewControl> {
            Ok(ViewControl::Continue)
        }
    }

    fn quote(value: Decimal) -> Quote {
        Quote::new("Bookmaker1", Odds::try_new(value).unwrap())
    }

    fn fixtures() -> Vec<Match> {
        vec![
            Match::new("Match 1", vec![quote(dec!(2.10))], vec![quote(dec!(2.00))]),
            Match::new("Match 2", vec![], vec![quote(dec!(2.00))]),
        ]
    }

    #[test]
    fn skip_policy_runs_to_completion() {
        let simulation = Simulation::new(dec!(1000), MissingOddsPolicy::Skip, 15).unwrap();
        let mut renderer = Counting::default();

        let report = simulation
            .run(&mut Fixed(fixtures()), &mut renderer)
            .unwrap();

        assert_eq!(report.reports.len(), 2);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.total_profit(), dec!(24.39));
        assert_eq!(renderer.frames, 6);
    }

    #[test]
    fn abort_policy_fails_before_rendering() {
        let simulation = Simulation::new(dec!(1000), MissingOddsPolicy::Abort, 15).unwrap();
        let mut renderer = Counting::default();

        let result = simulation.run(&mut Fixed(fixtures()), &mut renderer);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::MissingOddsData { .. }))
        ));
        assert_eq!(renderer.frames, 0);
    }

    #[test]
    fn rejects_zero_bins() {
        let result = Simulation::new(dec!(1000), MissingOddsPolicy::Skip, 0);
        assert!(matches!(
            result,
            Err(DomainError::InvalidParameter {
                name: "histogram_bins",
                ..
            })
        ));
    }
}
