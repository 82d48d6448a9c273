//! Handler for the `evaluate` command.

use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::command::EvaluateArgs;
use crate::adapter::inbound::cli::output;
use crate::application::evaluator::Evaluator;
use crate::domain::{format_amount, Evaluation, Match, MatchId, Odds, Outcome, Quote};
use crate::error::Result;

/// Bookmakers are numbered in the order their odds were given.
fn quotes(odds: &[Decimal]) -> Result<Vec<Quote>> {
    odds.iter()
        .enumerate()
        .map(|(i, value)| -> Result<Quote> {
            Ok(Quote::new(format!("Bookmaker{}", i + 1), Odds::try_new(*value)?))
        })
        .collect()
}

/// Build the match described by the command line.
pub fn build_match(args: &EvaluateArgs) -> Result<Match> {
    Ok(Match::new(
        MatchId::numbered(1),
        quotes(&args.team_a)?,
        quotes(&args.team_b)?,
    ))
}

/// Execute `evaluate`.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let config = args.config.load()?;
    let investment = args.investment.unwrap_or(config.simulation.investment);
    let currency = config.simulation.currency;

    let fixture = build_match(args)?;
    let evaluation = Evaluator::new(investment)?.evaluate(&fixture)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "evaluate",
            "evaluation": evaluation,
        }));
        return Ok(());
    }

    print_evaluation(&evaluation, &currency);
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation, currency: &str) {
    output::section("Best Odds");
    for (outcome, odds) in evaluation.best_odds().iter() {
        let implied = evaluation.implied_probability().get(outcome);
        output::field(
            outcome.label(),
            format!(
                "{odds}  {}",
                output::muted(format!("implied {}%", format_amount(*implied * Decimal::ONE_HUNDRED)))
            ),
        );
    }
    output::field(
        "Total probability",
        format!("{}%", format_amount(evaluation.total_probability_pct())),
    );

    let Some(arbitrage) = evaluation.arbitrage() else {
        output::section("Result");
        output::note("No arbitrage: implied probabilities sum to 100% or more.");
        return;
    };

    output::section("Stakes");
    for outcome in Outcome::ALL {
        output::field(
            outcome.label(),
            format!(
                "{currency}{}  {}",
                format_amount(*arbitrage.stakes().get(outcome)),
                output::muted(format!(
                    "returns {currency}{}",
                    format_amount(*arbitrage.returns().get(outcome))
                ))
            ),
        );
    }

    output::section("Result");
    output::success("Arbitrage opportunity");
    output::field("Investment", format!("{currency}{}", format_amount(evaluation.investment())));
    output::field("Guaranteed profit", output::amount(currency, arbitrage.profit()));
}
