//! Path utilities for surebet.
//!
//! Data lives under `~/.surebet/`:
//! - `~/.surebet/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the surebet home directory (`~/.surebet/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".surebet")
}

/// Returns the default config file path (`~/.surebet/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_surebet_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".surebet"));
        assert_eq!(config.file_name().and_then(|n| n.to_str()), Some("config.toml"));
    }
}
