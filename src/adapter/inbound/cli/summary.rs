//! Final summary table of a run.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::report::{Summary, SummaryRow};
use crate::domain::format_amount;

pub const NO_OPPORTUNITIES: &str = "No arbitrage opportunities found in any match.";

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Match")]
    name: String,
    #[tabled(rename = "Total Probability (%)")]
    total_probability: String,
    #[tabled(rename = "Guaranteed Profit")]
    profit: String,
    #[tabled(rename = "Team A Odds")]
    team_a: String,
    #[tabled(rename = "Team B Odds")]
    team_b: String,
}

impl OpportunityRow {
    fn new(row: &SummaryRow, currency: &str) -> Self {
        Self {
            name: row.match_id.to_string(),
            total_probability: format_amount(row.total_probability_pct),
            profit: format!("{currency}{}", format_amount(row.profit)),
            team_a: row.team_a_odds.to_string(),
            team_b: row.team_b_odds.to_string(),
        }
    }
}

/// The opportunities table, or `None` when there were no opportunities.
#[must_use]
pub fn table(summary: &Summary, currency: &str) -> Option<String> {
    if !summary.has_opportunities() {
        return None;
    }
    let rows = summary
        .rows
        .iter()
        .map(|row| OpportunityRow::new(row, currency));
    Some(Table::new(rows).to_string())
}

/// The closing total line.
#[must_use]
pub fn total_line(summary: &Summary, currency: &str) -> String {
    format!(
        "Total Guaranteed Profit across arbitrage opportunities: {currency}{}",
        format_amount(summary.total_profit())
    )
}

/// Summary as one JSON document.
#[must_use]
pub fn to_json(summary: &Summary, currency: &str) -> serde_json::Value {
    json!({
        "command": "run",
        "matches": summary.matches,
        "skipped": summary.skipped,
        "arbitrage_count": summary.arbitrage_count(),
        "currency": currency,
        "total_profit": format_amount(summary.total_profit()),
        "opportunities": summary.rows,
    })
}

/// Print the detailed analysis for every match.
pub fn print(summary: &Summary, currency: &str) {
    if output::is_json() {
        output::json_output(to_json(summary, currency));
        return;
    }

    output::section("Detailed Analysis for All Matches");
    output::field("Matches", summary.matches);
    if summary.skipped > 0 {
        output::field("Skipped", summary.skipped);
    }
    output::field("Arbitrage", summary.arbitrage_count());

    match table(summary, currency) {
        Some(table) => {
            output::lines("");
            output::lines(&table);
            output::lines("");
            output::lines(&total_line(summary, currency));
        }
        None => output::note(NO_OPPORTUNITIES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchId, Odds};
    use rust_decimal_macros::dec;

    fn summary() -> Summary {
        Summary {
            matches: 3,
            skipped: 0,
            rows: vec![SummaryRow {
                match_id: MatchId::numbered(2),
                total_probability_pct: dec!(97.62),
                profit: dec!(24.39),
                team_a_odds: Odds::try_new(dec!(2.10)).unwrap(),
                team_b_odds: Odds::try_new(dec!(2.00)).unwrap(),
            }],
            exact_total_profit: dec!(24.390243902439),
        }
    }

    #[test]
    fn table_lists_each_opportunity() {
        let table = table(&summary(), "₹").unwrap();
        for expected in [
            "Match",
            "Total Probability (%)",
            "Guaranteed Profit",
            "Team A Odds",
            "Team B Odds",
            "Match 2",
            "97.62",
            "₹24.39",
            "2.10",
            "2.00",
        ] {
            assert!(table.contains(expected), "missing {expected} in\n{table}");
        }
    }

    #[test]
    fn total_line_rounds_to_two_places() {
        assert_eq!(
            total_line(&summary(), "₹"),
            "Total Guaranteed Profit across arbitrage opportunities: ₹24.39"
        );
    }

    #[test]
    fn no_table_without_opportunities() {
        assert!(table(&Summary::default(), "₹").is_none());
    }

    #[test]
    fn json_document_carries_totals() {
        let value = to_json(&summary(), "₹");
        assert_eq!(value["arbitrage_count"], 1);
        assert_eq!(value["total_profit"], "24.39");
        assert_eq!(value["opportunities"][0]["match_id"], "Match 2");
    }
}
