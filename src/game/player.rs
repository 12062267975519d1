use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// One of the two registry slots a player can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    pub(crate) fn from_index(index: usize) -> Option<PlayerId> {
        match index {
            0 => Some(PlayerId::First),
            1 => Some(PlayerId::Second),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Token colors a player can pick.
///
/// [`TokenColor::BACKGROUND`] is the color of an empty cell and can never be
/// assigned to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenColor {
    Red,
    Yellow,
    Blue,
    Black,
    Green,
    Magenta,
    Cyan,
    White,
}

impl TokenColor {
    pub const BACKGROUND: TokenColor = TokenColor::White;

    pub fn name(self) -> &'static str {
        match self {
            TokenColor::Red => "red",
            TokenColor::Yellow => "yellow",
            TokenColor::Blue => "blue",
            TokenColor::Black => "black",
            TokenColor::Green => "green",
            TokenColor::Magenta => "magenta",
            TokenColor::Cyan => "cyan",
            TokenColor::White => "white",
        }
    }

    pub fn is_reserved(self) -> bool {
        self == Self::BACKGROUND
    }
}

impl fmt::Display for TokenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered participant: display name, token color, kind and turn flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: TokenColor,
    kind: PlayerKind,
    active: bool,
}

impl Player {
    /// Create an inactive player. Fails if the name is empty or blank.
    pub fn new(
        name: impl Into<String>,
        color: TokenColor,
        kind: PlayerKind,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyName);
        }
        Ok(Player {
            name,
            color,
            kind,
            active: false,
        })
    }

    /// Built-in identities skip name validation.
    pub(crate) fn preset(name: &str, color: TokenColor, kind: PlayerKind, active: bool) -> Self {
        Player {
            name: name.to_string(),
            color,
            kind,
            active,
        }
    }

    pub fn human(name: impl Into<String>, color: TokenColor) -> Result<Self, GameError> {
        Self::new(name, color, PlayerKind::Human)
    }

    pub fn computer(name: impl Into<String>, color: TokenColor) -> Result<Self, GameError> {
        Self::new(name, color, PlayerKind::Computer)
    }

    /// Builder-style setter for the turn flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> TokenColor {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {:?})", self.name, self.color, self.kind)
    }
}
