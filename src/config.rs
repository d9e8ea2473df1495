//! Runtime configuration: command-line options and environment.
//!
//! Gameplay tuning lives in `core::constants`; this is only what varies
//! between runs.

use crate::core::constants::{LORE_DEFAULT_ENDPOINT, LORE_DEFAULT_MODEL, LORE_DEFAULT_TIMEOUT_MS};
use std::env;
use std::time::Duration;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Fixed RNG seed for a reproducible session.
    pub seed: Option<u64>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("Unknown argument: {0}")]
    Unknown(String),
    #[error("--seed needs a value")]
    MissingSeed,
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

impl Config {
    /// Parses `std::env::args()`, skipping the program name.
    pub fn from_args() -> Result<Command, ArgError> {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I, S>(args: I) -> Result<Command, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--version" | "-v" => return Ok(Command::Version),
                "--help" | "-h" => return Ok(Command::Help),
                "--seed" => {
                    let value = args.next().ok_or(ArgError::MissingSeed)?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ArgError::InvalidSeed(value.clone()))?;
                    config.seed = Some(seed);
                }
                _ => return Err(ArgError::Unknown(arg)),
            }
        }
        Ok(Command::Play(config))
    }
}

pub const USAGE: &str = "\
River Legends - a terminal fishing game

Usage: river [options]

Options:
  --seed <n>  Use a fixed random seed
  --version   Show version information
  --help      Show this help message

Environment:
  GEMINI_API_KEY         Enables fish lore and shopkeeper chat
  RIVER_LORE_MODEL       Model name (default gemini-2.5-flash)
  RIVER_LORE_ENDPOINT    API base URL
  RIVER_LORE_TIMEOUT_MS  Request timeout (default 8000)
  RIVER_LOG              Log filter (default info)";

/// Settings for the flavor-text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoreConfig {
    /// None means the service is not configured.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for LoreConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: LORE_DEFAULT_MODEL.to_string(),
            endpoint: LORE_DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_millis(LORE_DEFAULT_TIMEOUT_MS),
        }
    }
}

impl LoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("RIVER_LORE_MODEL").unwrap_or(defaults.model),
            endpoint: get("RIVER_LORE_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            timeout: get("RIVER_LORE_TIMEOUT_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
