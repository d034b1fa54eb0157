use std::{env, fmt};

use log::debug;

use crate::{
    constants::{ROUNDS_VAR, SEED_VAR, SIZE, SIZE_VAR, WALK_VAR},
    maze::Direction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub seed: Option<u64>, // None: seed from the thread RNG.
    pub walk: Vec<Direction>,
    pub rounds: usize, // Mazes to play through before the walk stops.
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(String),
    InvalidSeed(String),
    InvalidMove(char),
    InvalidRounds(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(value) => {
                write!(f, "{} must be a positive integer, got '{}'", SIZE_VAR, value)
            }
            ConfigError::InvalidSeed(value) => {
                write!(f, "{} must be an unsigned integer, got '{}'", SEED_VAR, value)
            }
            ConfigError::InvalidMove(c) => {
                write!(f, "{} contains invalid move '{}'", WALK_VAR, c)
            }
            ConfigError::InvalidRounds(value) => {
                write!(f, "{} must be a positive integer, got '{}'", ROUNDS_VAR, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: SIZE,
            seed: None,
            walk: Vec::new(),
            rounds: 1,
        }
    }
}

impl Config {
    /// Reads the configuration from the environment, after loading a `.env`
    /// file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Config::default();

        if let Some(size) = value(SIZE_VAR) {
            config.size = match size.parse::<usize>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => return Err(ConfigError::InvalidSize(size)),
            };
        }

        if let Some(seed) = value(SEED_VAR) {
            let parsed = seed.parse().map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            config.seed = Some(parsed);
        }

        if let Some(rounds) = value(ROUNDS_VAR) {
            config.rounds = match rounds.parse::<usize>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => return Err(ConfigError::InvalidRounds(rounds)),
            };
        }

        if let Some(walk) = value(WALK_VAR) {
            config.walk = parse_walk(&walk)?;
        }

        debug!("loaded {:?}", config);
        Ok(config)
    }
}

/// Parses a string of move letters such as `"DDrU"`. Whitespace is ignored.
pub fn parse_walk(input: &str) -> Result<Vec<Direction>, ConfigError> {
    input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            ch.to_string()
                .parse::<Direction>()
                .map_err(|_| ConfigError::InvalidMove(ch))
        })
        .collect()
}
