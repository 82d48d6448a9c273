//! Handler for the `generate` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::GenerateArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::match_file::{to_json, write_matches};
use crate::adapter::outbound::GeneratedMatches;
use crate::error::Result;
use crate::infrastructure::config::simulation::SimulationConfig;
use crate::port::MatchSource;

/// Apply command-line overrides to the simulation section.
fn apply_overrides(simulation: &mut SimulationConfig, args: &GenerateArgs) {
    if let Some(n) = args.matches {
        simulation.num_matches = n;
    }
    if let Some(seed) = args.seed {
        simulation.seed = Some(seed);
    }
    if let Some(low) = args.odds_low {
        simulation.odds_low = low;
    }
    if let Some(high) = args.odds_high {
        simulation.odds_high = high;
    }
}

/// Execute `generate`.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let mut config = args.config.load()?;
    apply_overrides(&mut config.simulation, args);
    config.validate()?;

    let mut source =
        GeneratedMatches::new(config.simulation.generator_params(), config.simulation.seed);
    let matches = source.load()?;

    let Some(path) = &args.output else {
        output::raw(&to_json(&matches)?);
        return Ok(());
    };

    write_matches(path, &matches)?;
    if output::is_json() {
        output::json_output(json!({
            "command": "generate",
            "path": path.display().to_string(),
            "matches": matches.len(),
            "seed": config.simulation.seed,
        }));
        return Ok(());
    }

    output::success(&format!("Generated {} matches", matches.len()));
    output::field("Path", path.display());
    output::field("Source", source.describe());
    output::hint(&format!("replay with: surebet run --input {}", path.display()));
    Ok(())
}
