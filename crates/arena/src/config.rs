//! Arena configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ArenaError, Result};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Match seed; game `i` reseeds the engines from `seed + i`. None = entropy.
    pub seed: Option<u64>,
    /// Where to write the JSON results, if anywhere
    pub results_path: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 300,
            alternate_colors: true,
            seed: None,
            results_path: None,
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ArenaConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(ArenaError::InvalidConfig("games must be at least 1".into()));
        }
        if self.max_plies == 0 {
            return Err(ArenaError::InvalidConfig(
                "max_plies must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
