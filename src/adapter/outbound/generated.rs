//! Match source backed by the odds generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::generator::{generate, GeneratorParams};
use crate::domain::Match;
use crate::error::Result;
use crate::port::MatchSource;

/// Randomly generated matches from an explicit, optionally seeded RNG.
pub struct GeneratedMatches {
    params: GeneratorParams,
    seed: Option<u64>,
    rng: StdRng,
}

impl GeneratedMatches {
    /// Seeded when `seed` is given, otherwise seeded from OS entropy.
    #[must_use]
    pub fn new(params: GeneratorParams, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { params, seed, rng }
    }

    #[must_use]
    pub const fn params(&self) -> &GeneratorParams {
        &self.params
    }
}

impl MatchSource for GeneratedMatches {
    fn describe(&self) -> String {
        match self.seed {
            Some(seed) => format!("generated (seed {seed})"),
            None => "generated".to_string(),
        }
    }

    fn load(&mut self) -> Result<Vec<Match>> {
        debug!(
            matches = self.params.num_matches,
            seed = ?self.seed,
            "generating matches"
        );
        Ok(generate(&self.params, &mut self.rng)?)
    }
}
