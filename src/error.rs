use std::path::PathBuf;

use crate::game::{TokenColor, COLS};

/// Errors raised by the board and the engine for malformed requests.
///
/// These indicate a defect in the calling code. Ordinary game conditions
/// (full column, win, draw) are reported through events instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {0} is out of range (expected 0..{cols})", cols = COLS)]
    InvalidColumn(usize),

    #[error("cell ({row}, {column}) is out of range")]
    InvalidCell { row: usize, column: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("player name cannot be empty")]
    EmptyName,

    #[error("players are not configured (registered {0} of 2)")]
    PlayersNotConfigured(usize),

    #[error("player registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur while registering players.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("already have two players, cannot register more")]
    TooManyPlayers,

    #[error("player name '{0}' is already taken")]
    DuplicateName(String),

    #[error("player color {0} is already taken")]
    DuplicateColor(TokenColor),

    #[error("color {0} is reserved for empty cells")]
    ReservedColor(TokenColor),

    #[error("cannot register a default player: both default identities collide")]
    CannotResolveDefaults,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
