//! Configuration for the ticker client.
//!
//! Sources, later ones win:
//! - built-in defaults (the six demo quotes, 1s ticks)
//! - a TOML file passed with `--config`
//! - environment: `TICKER_TICK_MS`, `TICKER_MAX_TRADES`
//! - command line flags (applied in `main`)

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use ticker_core::{Quote, QuoteList};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSeed {
    pub symbol: String,
    pub price: f64,
}

impl QuoteSeed {
    fn new(symbol: &str, price: f64) -> Self {
        QuoteSeed {
            symbol: symbol.to_string(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub quotes: Vec<QuoteSeed>,
    /// Period of the simulated market feed.
    pub tick_interval_ms: u64,
    /// Maximum relative move per tick (0.01 = 1%).
    pub volatility: f64,
    pub feed_enabled: bool,
    /// Trade blotter length.
    pub max_trades: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            quotes: vec![
                QuoteSeed::new("HUMOR", 88.50),
                QuoteSeed::new("CLOTH", 81.70),
                QuoteSeed::new("HABIT", 98.00),
                QuoteSeed::new("SUPER", 83.10),
                QuoteSeed::new("INGRD", 79.40),
                QuoteSeed::new("MXTPE", 109.20),
            ],
            tick_interval_ms: 1000,
            volatility: 0.01,
            feed_enabled: true,
            max_trades: 100,
        }
    }
}

impl ClientConfig {
    /// Defaults, overlaid with `path` (if any) and the environment.
    ///
    /// Not validated yet: command line overrides still apply on top, so call
    /// [`ClientConfig::validate`] once they are in.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `TICKER_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.tick_interval_ms = read_or_default(&lookup, "TICKER_TICK_MS", self.tick_interval_ms)?;
        self.max_trades = read_or_default(&lookup, "TICKER_MAX_TRADES", self.max_trades)?;
        Ok(())
    }

    /// Command line flags win over the file and the environment.
    pub fn apply_cli_overrides(&mut self, tick_ms: Option<u64>, no_feed: bool) {
        if let Some(tick_ms) = tick_ms {
            self.tick_interval_ms = tick_ms;
        }
        if no_feed {
            self.feed_enabled = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.quotes.is_empty() {
            bail!("config must list at least one quote");
        }
        let mut seen = HashSet::new();
        for seed in &self.quotes {
            if seed.symbol.trim().is_empty() {
                bail!("quote symbol must not be empty");
            }
            if !seen.insert(seed.symbol.as_str()) {
                bail!("duplicate quote symbol {}", seed.symbol);
            }
            if !seed.price.is_finite() || seed.price <= 0.0 {
                bail!("quote {} must have a positive price, got {}", seed.symbol, seed.price);
            }
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            bail!("volatility must be a non-negative number");
        }
        Ok(())
    }

    pub fn quote_list(&self) -> QuoteList {
        self.quotes
            .iter()
            .map(|seed| Quote::new(seed.symbol.clone(), seed.price))
            .collect()
    }
}

fn read_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {val:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_demo_quotes() {
        let config = ClientConfig::default();
        config.validate().unwrap();

        let quotes = config.quote_list();
        assert_eq!(
            quotes.symbols().collect::<Vec<_>>(),
            ["HUMOR", "CLOTH", "HABIT", "SUPER", "INGRD", "MXTPE"]
        );
        assert_eq!(quotes.find("MXTPE").map(|q| q.price), Some(109.20));
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            tick_interval_ms = 250

            [[quotes]]
            symbol = "AAPL"
            price = 101.5

            [[quotes]]
            symbol = "MSFT"
            price = 51.0
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.quotes.len(), 2);
        assert_eq!(config.quotes[0], QuoteSeed::new("AAPL", 101.5));
        // Untouched keys keep their defaults.
        assert_eq!(config.max_trades, 100);
        assert!(config.feed_enabled);
    }

    #[test]
    fn environment_overrides_tick_interval() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(|key| match key {
                "TICKER_TICK_MS" => Some("200".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.max_trades, 100);
    }

    #[test]
    fn command_line_tick_wins_over_invalid_environment() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(|key| (key == "TICKER_TICK_MS").then(|| "0".to_string()))
            .unwrap();
        assert_eq!(config.tick_interval_ms, 0);

        config.apply_cli_overrides(Some(500), true);
        assert_eq!(config.tick_interval_ms, 500);
        assert!(!config.feed_enabled);
        config.validate().unwrap();
    }

    #[test]
    fn bad_environment_value_is_an_error() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_overrides(|key| (key == "TICKER_MAX_TRADES").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("TICKER_MAX_TRADES"));
    }

    #[test]
    fn validation_rejects_duplicates_and_bad_prices() {
        let mut config = ClientConfig::default();
        config.quotes.push(QuoteSeed::new("HUMOR", 1.0));
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.quotes = vec![QuoteSeed::new("ZERO", 0.0)];
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.quotes.clear();
        assert!(config.validate().is_err());
    }
}
