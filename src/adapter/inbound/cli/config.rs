//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: surebet config validate -c {}", path.display()));
    output::note(&format!("3. Run: surebet run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(arg: &ConfigPathArg) -> Result<()> {
    let config = arg.load()?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", arg.path().display());
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(arg: &ConfigPathArg) -> Result<()> {
    let path = arg.path();
    output::section("Config Validation");
    output::field("Path", path.display());

    let config = arg.load()?;
    if !path.exists() {
        output::warning("Config file not found; built-in defaults are valid");
    } else {
        output::success("Config file is valid");
    }

    output::field("Matches", config.simulation.num_matches);
    output::field(
        "Odds range",
        format!("{} - {}", config.simulation.odds_low, config.simulation.odds_high),
    );
    output::field("Missing odds", config.simulation.on_missing_odds);
    output::field("Next", format!("surebet run -c {}", path.display()));
    Ok(())
}
