//! Runtime settings read from the environment.

use std::path::PathBuf;

pub const STATE_FILE_ENV: &str = "TRADE_ANALYZER_STATE_FILE";
pub const LOG_FILTER_ENV: &str = "TRADE_ANALYZER_LOG";
pub const AUTOSAVE_ENV: &str = "TRADE_ANALYZER_AUTOSAVE";

pub const DEFAULT_LOG_FILTER: &str = "info,trade_analyzer=debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the platform config directory location of the saved teams.
    pub state_file: Option<PathBuf>,
    pub log_filter: String,
    /// Save the teams after every change.
    pub autosave: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            autosave: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            state_file: non_blank(STATE_FILE_ENV).map(PathBuf::from),
            log_filter: non_blank(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
            autosave: non_blank(AUTOSAVE_ENV)
                .map(|value| parse_flag(&value).unwrap_or(defaults.autosave))
                .unwrap_or(defaults.autosave),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (STATE_FILE_ENV, "/tmp/teams.json"),
            (LOG_FILTER_ENV, "warn"),
            (AUTOSAVE_ENV, "off"),
        ]);
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/teams.json")));
        assert_eq!(config.log_filter, "warn");
        assert!(!config.autosave);
    }

    #[test]
    fn blank_and_garbage_values_fall_back() {
        let config = config_from(&[(STATE_FILE_ENV, "  "), (AUTOSAVE_ENV, "maybe")]);
        assert_eq!(config.state_file, None);
        assert!(config.autosave);
    }
}
