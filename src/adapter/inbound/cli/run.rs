//! Handler for the `run` command.

use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{output, summary};
use crate::adapter::outbound::render::{HeadlessRenderer, TerminalRenderer};
use crate::adapter::outbound::{GeneratedMatches, JsonMatchFile};
use crate::application::simulation::{Simulation, SimulationReport};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{ChartRenderer, MatchSource};

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &RunArgs) {
    let simulation = &mut config.simulation;
    if let Some(n) = args.matches {
        simulation.num_matches = n;
    }
    if let Some(investment) = args.investment {
        simulation.investment = investment;
    }
    if let Some(low) = args.odds_low {
        simulation.odds_low = low;
    }
    if let Some(high) = args.odds_high {
        simulation.odds_high = high;
    }
    if let Some(seed) = args.seed {
        simulation.seed = Some(seed);
    }
    if let Some(policy) = args.on_missing_odds {
        simulation.on_missing_odds = policy;
    }

    let render = &mut config.render;
    if let Some(delay) = args.delay_ms {
        render.delay_ms = delay;
    }
    if args.no_animate {
        render.animate = false;
    }

    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

/// Effective configuration for `args`, validated after overrides.
pub fn resolve_config(args: &RunArgs) -> Result<Config> {
    let mut config = args.config.load()?;
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "surebet starting");

    let simulation = Simulation::new(
        config.simulation.investment,
        config.simulation.on_missing_odds,
        config.render.histogram_bins,
    )?;

    let mut source: Box<dyn MatchSource> = match &args.input {
        Some(path) => Box::new(JsonMatchFile::new(path)),
        None => Box::new(GeneratedMatches::new(
            config.simulation.generator_params(),
            config.simulation.seed,
        )),
    };

    print_startup(&config, source.as_ref());

    let report = if config.render.animate && output::is_interactive() {
        let mut renderer = TerminalRenderer::new(
            config.simulation.currency.clone(),
            config.render.delay(),
            config.render.linger(),
        );
        let report = play(&simulation, source.as_mut(), &mut renderer);
        renderer.close()?;
        report?
    } else {
        let visible = config.render.animate && !output::is_json() && !output::is_quiet();
        let mut renderer = HeadlessRenderer::new(visible);
        play(&simulation, source.as_mut(), &mut renderer)?
    };

    if report.playback.stopped_early {
        output::note("Charts skipped.");
    }
    summary::print(&report.summary, &config.simulation.currency);
    Ok(())
}

fn play<R: ChartRenderer>(
    simulation: &Simulation,
    source: &mut dyn MatchSource,
    renderer: &mut R,
) -> Result<SimulationReport> {
    simulation.run(source, renderer)
}

fn print_startup(config: &Config, source: &dyn MatchSource) {
    if output::is_json() || output::is_quiet() {
        return;
    }
    let simulation = &config.simulation;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", source.describe());
    output::field(
        "Investment",
        format!("{}{}", simulation.currency, simulation.investment),
    );
    output::field(
        "Odds range",
        format!("{} - {}", simulation.odds_low, simulation.odds_high),
    );
    if output::verbosity() > 0 {
        output::field("Bookmakers", simulation.bookmakers.join(", "));
        output::field("Missing odds", simulation.on_missing_odds);
        output::field("Frame delay", format!("{}ms", config.render.delay_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::stream::MissingOddsPolicy;
    use crate::error::{ConfigError, Error};
    use rust_decimal_macros::dec;

    fn args_with_config(content: &str) -> (tempfile::TempDir, RunArgs) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        let mut args = RunArgs::default();
        args.config.config = Some(path);
        (dir, args)
    }

    #[test]
    fn flags_override_file_values() {
        let (_dir, mut args) = args_with_config("[simulation]\nnum_matches = 10\n");
        args.matches = Some(3);
        args.investment = Some(dec!(250));
        args.on_missing_odds = Some(MissingOddsPolicy::Abort);
        args.no_animate = true;
        args.json_logs = true;

        let config = resolve_config(&args).unwrap();

        assert_eq!(config.simulation.num_matches, 3);
        assert_eq!(config.simulation.investment, dec!(250));
        assert_eq!(config.simulation.on_missing_odds, MissingOddsPolicy::Abort);
        assert!(!config.render.animate);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn overrides_are_validated() {
        let (_dir, mut args) = args_with_config("");
        args.odds_low = Some(dec!(1.0));

        let result = resolve_config(&args);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "odds_low",
                ..
            }))
        ));
    }
}
