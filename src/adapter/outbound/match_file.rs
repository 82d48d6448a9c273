//! JSON match files.
//!
//! ```json
//! [
//!   {
//!     "id": "Match 1",
//!     "team_a": { "Bookmaker1": 2.10, "Bookmaker2": 2.05 },
//!     "team_b": { "Bookmaker1": 1.95, "Bookmaker2": 2.00 }
//!   }
//! ]
//! ```
//!
//! Odds may be written as JSON numbers or strings. Files written by this
//! module use strings so no precision is lost.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Match, Odds, Outcome, Quote};
use crate::error::{Error, Result};
use crate::port::MatchSource;

#[derive(Debug, Serialize, Deserialize)]
struct MatchRecord {
    id: String,
    #[serde(default)]
    team_a: BTreeMap<String, Decimal>,
    #[serde(default)]
    team_b: BTreeMap<String, Decimal>,
}

impl MatchRecord {
    fn from_match(fixture: &Match) -> Self {
        let book = |outcome| {
            fixture
                .quotes(outcome)
                .iter()
                .map(|q| (q.bookmaker().as_str().to_string(), q.odds().value()))
                .collect()
        };
        Self {
            id: fixture.id().as_str().to_string(),
            team_a: book(Outcome::TeamA),
            team_b: book(Outcome::TeamB),
        }
    }

    fn into_match(self) -> Result<Match> {
        let quotes = |book: BTreeMap<String, Decimal>| -> Result<Vec<Quote>> {
            book.into_iter()
                .map(|(bookmaker, odds)| -> Result<Quote> {
                    Ok(Quote::new(bookmaker, Odds::try_new(odds)?))
                })
                .collect()
        };
        let team_a = quotes(self.team_a)?;
        let team_b = quotes(self.team_b)?;
        Ok(Match::new(self.id, team_a, team_b))
    }
}

/// Matches read from a JSON file, in file order.
#[derive(Debug, Clone)]
pub struct JsonMatchFile {
    path: PathBuf,
}

impl JsonMatchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_error(&self, reason: impl ToString) -> Error {
        Error::MatchFile {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl MatchSource for JsonMatchFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<Vec<Match>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.file_error(e))?;
        let records: Vec<MatchRecord> =
            serde_json::from_str(&content).map_err(|e| self.file_error(e))?;
        debug!(path = %self.path.display(), matches = records.len(), "match file parsed");
        records.into_iter().map(MatchRecord::into_match).collect()
    }
}

/// Serialize matches to the match file format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(matches: &[Match]) -> Result<String> {
    let records: Vec<MatchRecord> = matches.iter().map(MatchRecord::from_match).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write matches to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_matches(path: &Path, matches: &[Match]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(matches)?)?;
    Ok(())
}
