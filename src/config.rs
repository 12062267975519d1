use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{
    default_computer, default_human, human_pair, Player, PlayerId, PlayerKind, PlayerRegistry,
    TokenColor,
};

/// Which default pair of players to use for slots without a custom identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsComputer,
}

/// Match settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Seed for the computer's random column choice. Unseeded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub starting_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::default(),
            seed: None,
            starting_player: PlayerId::First,
        }
    }
}

/// A custom player identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: TokenColor,
    #[serde(default = "default_kind")]
    pub kind: PlayerKind,
}

fn default_kind() -> PlayerKind {
    PlayerKind::Human
}

impl PlayerConfig {
    pub fn to_player(&self) -> Result<Player, GameError> {
        Player::new(self.name.clone(), self.color, self.kind)
    }
}

/// Optional per-slot overrides of the mode's default players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PlayerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<PlayerConfig>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// The players are checked by building the registry they describe, so
    /// the same name/color rules apply as at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_registry()
            .map(|_| ())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Register the configured players, filling unset slots with the mode's
    /// defaults, and flag the starting player.
    ///
    /// A mode default that clashes with a custom player is replaced by
    /// whichever default identity is still free.
    pub fn build_registry(&self) -> Result<PlayerRegistry, GameError> {
        let presets = match self.game.mode {
            GameMode::HumanVsHuman => human_pair(),
            GameMode::HumanVsComputer => [default_human(), default_computer()],
        };

        let mut registry = PlayerRegistry::new();
        for (slot, preset) in [&self.players.first, &self.players.second]
            .into_iter()
            .zip(presets)
        {
            match slot {
                Some(custom) => {
                    registry.register(custom.to_player()?)?;
                }
                None if !registry.collides(&preset) => {
                    registry.register(preset)?;
                }
                None => {
                    registry.register_default()?;
                }
            }
        }
        registry.set_active(self.game.starting_player)?;
        Ok(registry)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
