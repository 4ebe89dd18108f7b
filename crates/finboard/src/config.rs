use anyhow::{Context, Result};
use finboard_market::prelude::Period;
use finboard_market::yahoo::DEFAULT_CHART_URL;
use std::path::PathBuf;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

/// Settings derived from environment variables (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub user_agent: String,
    pub chart_url: String,
    pub env_file: PathBuf,
    /// Raw `FINBOARD_PERIOD`; only stock commands parse it, see [`Config::period`].
    pub period: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            user_agent: var("USER_AGENT", DEFAULT_USER_AGENT),
            chart_url: var("YAHOO_CHART_URL", DEFAULT_CHART_URL),
            env_file: PathBuf::from(var("FINBOARD_ENV_FILE", ".env")),
            period: var("FINBOARD_PERIOD", "1y"),
        }
    }

    /// Default lookback for stock commands.
    pub fn period(&self) -> Result<Period> {
        self.period
            .parse()
            .with_context(|| format!("FINBOARD_PERIOD={}", self.period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = Config::from_lookup(lookup(&[("USER_AGENT", "  ")]));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.chart_url, DEFAULT_CHART_URL);
        assert_eq!(config.env_file, PathBuf::from(".env"));
        assert_eq!(config.period().unwrap(), Period::OneYear);
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = Config::from_lookup(lookup(&[
            ("YAHOO_CHART_URL", " http://localhost:8080/chart "),
            ("FINBOARD_ENV_FILE", "/tmp/creds.env"),
            ("FINBOARD_PERIOD", "5d"),
        ]));
        assert_eq!(config.chart_url, "http://localhost:8080/chart");
        assert_eq!(config.env_file, PathBuf::from("/tmp/creds.env"));
        assert_eq!(config.period().unwrap(), Period::FiveDays);
    }

    #[test]
    fn bad_period_only_fails_when_asked_for() {
        let config = Config::from_lookup(lookup(&[
            ("FINBOARD_PERIOD", "fortnight"),
            ("FINBOARD_ENV_FILE", "creds.env"),
        ]));
        // secrets commands never read the period
        assert_eq!(config.env_file, PathBuf::from("creds.env"));

        let err = config.period().unwrap_err();
        assert!(format!("{err:#}").contains("FINBOARD_PERIOD=fortnight"));
    }
}
