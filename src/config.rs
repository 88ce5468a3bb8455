//! Game configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```yaml
//! timer_seconds: 30
//! matching:
//!   fold_diacritics: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GameEngineError, Result};
use crate::matching::MatchOptions;
use crate::scoring::ScoringRules;

/// Environment variable the CLI reads a config path from
pub const CONFIG_ENV_VAR: &str = "GUESS_FRAME_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown per frame once it is revealed
    pub timer_seconds: u32,

    /// Frames drawn from the deck for one game
    pub frames_per_game: usize,

    pub matching: MatchOptions,

    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_seconds: 20,
            frames_per_game: 20,
            matching: MatchOptions::default(),
            scoring: ScoringRules::default(),
        }
    }
}

impl GameConfig {
    /// Parse YAML config
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, anything else is read as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from `$GUESS_FRAME_CONFIG`, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        Self::resolve_env(std::env::var(CONFIG_ENV_VAR).ok().as_deref())
    }

    fn resolve_env(env_path: Option<&str>) -> Result<Self> {
        match env_path.map(str::trim) {
            Some(env_path) if !env_path.is_empty() => Self::load(env_path),
            Some(_) => {
                tracing::warn!("${} is set but blank, using defaults", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.timer_seconds == 0 {
            return Err(GameEngineError::Config("timer_seconds must be positive".into()));
        }
        if self.frames_per_game == 0 {
            return Err(GameEngineError::Config("frames_per_game must be positive".into()));
        }

        for (name, value) in [
            ("fuzzy_threshold", self.matching.fuzzy_threshold),
            ("partial_threshold", self.matching.partial_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(GameEngineError::Config(format!(
                    "matching.{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        let ascending = self
            .scoring
            .bonus_tiers
            .windows(2)
            .all(|pair| pair[0].within_secs < pair[1].within_secs);
        if !ascending {
            return Err(GameEngineError::Config(
                "scoring.bonus_tiers must be in strictly ascending within_secs order".into(),
            ));
        }

        Ok(())
    }
}
