//! Match source port.

use crate::domain::Match;
use crate::error::Result;

/// Supplies the ordered match set for a run.
///
/// Implementations: generated odds and JSON match files. Whatever the
/// source, matches come back in the order they are to be evaluated.
pub trait MatchSource {
    /// Short description used in logs, e.g. `generated` or a file path.
    fn describe(&self) -> String;

    /// Produce every match for the run.
    ///
    /// # Errors
    ///
    /// Generation-time failures abort the run; no partial set is returned.
    fn load(&mut self) -> Result<Vec<Match>>;
}
