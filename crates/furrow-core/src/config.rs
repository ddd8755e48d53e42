//! Configuration loading and typed config structures for a Furrow session.
//!
//! The optional `furrow-config.yaml` mirrors [`GameConfig`]. Every key has a
//! default, so an empty file (or none at all) gives the standard game: a
//! 5x10 farm with 10 rocks, 100 starting coins, the standard action costs,
//! and the standard crop catalog.
//!
//! ```yaml
//! farm:
//!   rows: 5
//!   columns: 10
//!   rocks: 10
//!   seed: 42
//! economy:
//!   starting_coins: 100
//! actions:
//!   mine_cost: 50
//! crops: []
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use furrow_farmer::ActionCosts;
use furrow_world::{CropCatalog, CropDefinition, SeededRandom};

/// Allowed number of requested rocks.
pub const ROCK_COUNT_RANGE: RangeInclusive<u32> = 10..=30;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible game.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Grid size, rocks, and seed.
    #[serde(default)]
    pub farm: FarmConfig,

    /// Starting economy.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Fixed action costs and experience.
    #[serde(default)]
    pub actions: ActionCosts,

    /// Replacement crop catalog. Empty means the standard catalog.
    #[serde(default)]
    pub crops: Vec<CropDefinition>,
}

impl GameConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if it fails [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// An empty string yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| Err(ConfigError::Invalid { reason });
        let farm = &self.farm;

        if farm.rows == 0 || farm.columns == 0 {
            return invalid(format!(
                "farm must have at least one row and column, got {}x{}",
                farm.rows, farm.columns
            ));
        }
        if !ROCK_COUNT_RANGE.contains(&farm.rocks) {
            return invalid(format!(
                "rock count {} is outside {}..={}",
                farm.rocks,
                ROCK_COUNT_RANGE.start(),
                ROCK_COUNT_RANGE.end()
            ));
        }
        let tiles = farm.rows.checked_mul(farm.columns);
        if tiles.is_none_or(|tiles| usize::try_from(farm.rocks).is_ok_and(|rocks| rocks > tiles)) {
            return invalid(format!(
                "{} rocks do not fit on a {}x{} farm",
                farm.rocks, farm.rows, farm.columns
            ));
        }
        if self.economy.starting_coins.is_sign_negative() {
            return invalid(String::from("starting_coins must not be negative"));
        }
        if let Err(err) = self.actions.validate() {
            return invalid(err.to_string());
        }
        if !self.crops.is_empty() {
            self.catalog()?;
        }
        Ok(())
    }

    /// The crop catalog this configuration asks for.
    pub fn catalog(&self) -> Result<CropCatalog, ConfigError> {
        if self.crops.is_empty() {
            return Ok(CropCatalog::standard());
        }
        CropCatalog::from_definitions(self.crops.clone()).map_err(|err| ConfigError::Invalid {
            reason: err.to_string(),
        })
    }

    /// Random source for this game: seeded when `farm.seed` is set,
    /// entropy-seeded otherwise.
    pub fn random_source(&self) -> SeededRandom {
        self.farm
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new)
    }
}

/// Grid and rock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FarmConfig {
    /// Number of tile rows.
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Number of tile columns.
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Rocks requested at session start. Fewer may be placed.
    #[serde(default = "default_rocks")]
    pub rocks: u32,

    /// Seed for rock placement and harvest yields. Absent means a fresh
    /// seed every run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            rocks: default_rocks(),
            seed: None,
        }
    }
}

/// Starting economy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Coins the player starts with.
    #[serde(default = "default_starting_coins")]
    pub starting_coins: Decimal,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_coins: default_starting_coins(),
        }
    }
}

const fn default_rows() -> usize {
    5
}

const fn default_columns() -> usize {
    10
}

const fn default_rocks() -> u32 {
    10
}

const fn default_starting_coins() -> Decimal {
    Decimal::ONE_HUNDRED
}
