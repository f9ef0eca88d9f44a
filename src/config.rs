//! Service configuration read from process environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::combat::BattleConfig;
use crate::data::DEFAULT_API_BASE;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BIND_VAR: &str = "POKEBATTLE_BIND";
pub const API_BASE_VAR: &str = "POKEBATTLE_API_BASE";
pub const TIMEOUT_VAR: &str = "POKEBATTLE_TIMEOUT_SECS";
pub const MAX_ROUNDS_VAR: &str = "POKEBATTLE_MAX_ROUNDS";
pub const SEED_VAR: &str = "POKEBATTLE_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub battle: BattleConfig,
    /// Default turn-order seed. `None` means a coin flip per battle.
    pub order_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            battle: BattleConfig::default(),
            order_seed: None,
        }
    }
}

impl AppConfig {
    /// Environment variables:
    /// - `POKEBATTLE_BIND` - listen address (default: 127.0.0.1:3000)
    /// - `POKEBATTLE_API_BASE` - upstream API root (default: https://pokeapi.co/api/v2)
    /// - `POKEBATTLE_TIMEOUT_SECS` - upstream request timeout (default: 10)
    /// - `POKEBATTLE_MAX_ROUNDS` - rounds before a battle is a draw (default: 1000)
    /// - `POKEBATTLE_SEED` - fixed turn-order seed (default: unset, coin flip)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind_addr) = read_string(&lookup, BIND_VAR) {
            config.bind_addr = bind_addr;
        }
        if let Some(api_base_url) = read_string(&lookup, API_BASE_VAR) {
            config.api_base_url = api_base_url;
        }
        if let Some(secs) = read_parsed::<u64, _>(&lookup, TIMEOUT_VAR, "a number of seconds")? {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(rounds) = read_parsed::<u32, _>(&lookup, MAX_ROUNDS_VAR, "a positive integer")? {
            config.battle = BattleConfig::with_max_rounds(rounds.max(1));
        }
        config.order_seed = read_parsed::<u64, _>(&lookup, SEED_VAR, "an unsigned integer")?;

        Ok(config)
    }
}

fn read_string<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_parsed<T, F>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match read_string(lookup, key) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key,
                value,
                expected,
            }),
    }
}
