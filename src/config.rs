use std::env;

use crate::blockchain::SearchLimits;

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Cap on proof-search attempts; `None` keeps the search unbounded.
    pub pow_max_attempts: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            pow_max_attempts: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            pow_max_attempts: lookup("POW_MAX_ATTEMPTS").and_then(|v| v.parse().ok()),
        }
    }

    pub fn search_limits(&self) -> SearchLimits {
        self.pow_max_attempts
            .map(SearchLimits::with_max_attempts)
            .unwrap_or_default()
    }
}

/// Which driver the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Serve,
    Demo,
}

impl Mode {
    /// Parse the first CLI argument; anything unrecognised falls back to `Serve`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("demo") => Mode::Demo,
            _ => Mode::Serve,
        }
    }
}
