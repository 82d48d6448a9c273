use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal_macros::dec;
use surebet::application::stream::MissingOddsPolicy;
use surebet::error::{ConfigError, Error};
use surebet::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("surebet-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> surebet::error::Result<Config> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[simulation]
num_matches = 250
investment = 500
odds_low = 1.5
odds_high = "2.75"
bookmakers = ["Alpha", "Beta", "Gamma"]
seed = 42
on_missing_odds = "abort"
currency = "$"

[render]
animate = false
delay_ms = 20
linger_ms = 0
histogram_bins = 10

[logging]
level = "debug"
format = "json"
"#;

    let config = load(toml).expect("valid config");

    assert_eq!(config.simulation.num_matches, 250);
    assert_eq!(config.simulation.investment, dec!(500));
    assert_eq!(config.simulation.odds_low, dec!(1.5));
    assert_eq!(config.simulation.odds_high, dec!(2.75));
    assert_eq!(config.simulation.bookmakers.len(), 3);
    assert_eq!(config.simulation.seed, Some(42));
    assert_eq!(config.simulation.on_missing_odds, MissingOddsPolicy::Abort);
    assert_eq!(config.simulation.currency, "$");
    assert!(!config.render.animate);
    assert_eq!(config.render.histogram_bins, 10);
    assert_eq!(config.logging.format, "json");

    let params = config.simulation.generator_params();
    assert_eq!(params.num_matches, 250);
    assert_eq!(params.bookmakers[2].as_str(), "Gamma");
}

#[test]
fn config_fills_missing_sections_with_defaults() {
    let config = load("[simulation]\nnum_matches = 7\n").expect("valid config");

    assert_eq!(config.simulation.num_matches, 7);
    assert_eq!(config.simulation.investment, dec!(1000));
    assert_eq!(config.render, Config::default().render);
    assert_eq!(config.logging, Config::default().logging);
}

#[test]
fn config_rejects_odds_low_at_one() {
    let result = load("[simulation]\nodds_low = 1.0\n");

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "odds_low",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid odds_low error, got {err}"),
        Ok(config) => panic!(
            "Expected odds_low to be rejected, got {}",
            config.simulation.odds_low
        ),
    }
}

#[test]
fn config_rejects_inverted_odds_range() {
    let result = load("[simulation]\nodds_low = 2.5\nodds_high = 2.0\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "odds_high",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_matches() {
    let result = load("[simulation]\nnum_matches = 0\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "num_matches",
            ..
        }))
    ));
}

#[test]
fn config_rejects_non_positive_investment() {
    let result = load("[simulation]\ninvestment = 0\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "investment",
            ..
        }))
    ));
}

#[test]
fn config_rejects_duplicate_bookmakers() {
    let result = load("[simulation]\nbookmakers = [\"A\", \"A\"]\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "bookmakers",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_histogram_bins() {
    let result = load("[render]\nhistogram_bins = 0\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "histogram_bins",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_log_format() {
    let result = load("[logging]\nformat = \"xml\"\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_missing_odds_policy() {
    let result = load("[simulation]\non_missing_odds = \"retry\"\n");

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn config_load_reports_missing_file() {
    let path = std::env::temp_dir().join("surebet-config-test-does-not-exist.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.simulation.seed = Some(9);
    config.render.delay_ms = 5;

    let rendered = config.to_toml().expect("serialize");

    assert_eq!(Config::parse_toml(&rendered).expect("parse"), config);
}
