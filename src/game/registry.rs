use crate::error::{GameError, RegistryError};

use super::player::{Player, PlayerId, PlayerKind, TokenColor};

pub const DEFAULT_PLAYER1_NAME: &str = "Player1";
pub const DEFAULT_PLAYER2_NAME: &str = "Computer Player";
pub const DEFAULT_PLAYER1_COLOR: TokenColor = TokenColor::Red;
pub const DEFAULT_PLAYER2_COLOR: TokenColor = TokenColor::Black;

pub const HUMAN_PLAYER1_NAME: &str = "Alice";
pub const HUMAN_PLAYER2_NAME: &str = "John";
pub const HUMAN_PLAYER1_COLOR: TokenColor = TokenColor::Red;
pub const HUMAN_PLAYER2_COLOR: TokenColor = TokenColor::Blue;

/// The human half of the default Human-vs-Computer pair. Starts active.
pub fn default_human() -> Player {
    Player::preset(DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER1_COLOR, PlayerKind::Human, true)
}

/// The computer half of the default Human-vs-Computer pair.
pub fn default_computer() -> Player {
    Player::preset(DEFAULT_PLAYER2_NAME, DEFAULT_PLAYER2_COLOR, PlayerKind::Computer, false)
}

/// Default Human-vs-Human pair, first player active.
pub fn human_pair() -> [Player; 2] {
    [
        Player::preset(HUMAN_PLAYER1_NAME, HUMAN_PLAYER1_COLOR, PlayerKind::Human, true),
        Player::preset(HUMAN_PLAYER2_NAME, HUMAN_PLAYER2_COLOR, PlayerKind::Human, false),
    ]
}

/// Holds the (at most) two players of the current match.
///
/// Names and colors are unique across the two registrations, and once both
/// slots are filled exactly one player is flagged active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        PlayerRegistry {
            players: Vec::with_capacity(2),
        }
    }

    /// Registry holding the default Human-vs-Computer pair.
    pub fn human_vs_computer() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.load_human_vs_computer()?;
        Ok(registry)
    }

    /// Registry holding the default Human-vs-Human pair.
    pub fn human_vs_human() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.load_human_vs_human()?;
        Ok(registry)
    }

    /// Drop the current players and register the default identities.
    pub fn load_human_vs_computer(&mut self) -> Result<(), RegistryError> {
        self.reset();
        self.register_defaults()
    }

    /// Drop the current players and register Alice and John.
    pub fn load_human_vs_human(&mut self) -> Result<(), RegistryError> {
        self.reset();
        for player in human_pair() {
            self.register(player)?;
        }
        Ok(())
    }

    /// Register a player into the next free slot.
    pub fn register(&mut self, player: Player) -> Result<PlayerId, RegistryError> {
        if player.color().is_reserved() {
            return Err(RegistryError::ReservedColor(player.color()));
        }
        let Some(id) = PlayerId::from_index(self.players.len()) else {
            return Err(RegistryError::TooManyPlayers);
        };
        if let Some(existing) = self.players.first() {
            if existing.name() == player.name() {
                return Err(RegistryError::DuplicateName(player.name().to_string()));
            }
            if existing.color() == player.color() {
                return Err(RegistryError::DuplicateColor(player.color()));
            }
        }

        self.players.push(player);
        if self.is_complete() {
            self.settle_active();
        }
        Ok(id)
    }

    /// Register one default identity: the human default unless its name or
    /// color is already taken, otherwise the computer default.
    pub fn register_default(&mut self) -> Result<PlayerId, RegistryError> {
        if self.is_complete() {
            return Err(RegistryError::TooManyPlayers);
        }
        for candidate in [default_human(), default_computer()] {
            if !self.collides(&candidate) {
                return self.register(candidate);
            }
        }
        Err(RegistryError::CannotResolveDefaults)
    }

    /// Fill every free slot with default identities.
    pub fn register_defaults(&mut self) -> Result<(), RegistryError> {
        while !self.is_complete() {
            self.register_default()?;
        }
        Ok(())
    }

    /// Whether `candidate` shares a name or color with a registered player.
    pub(crate) fn collides(&self, candidate: &Player) -> bool {
        self.players
            .iter()
            .any(|p| p.name() == candidate.name() || p.color() == candidate.color())
    }

    /// Keep the active flags complementary: the flagged player wins, and if
    /// neither or both are flagged the first slot starts.
    fn settle_active(&mut self) {
        let first = match (self.players[0].is_active(), self.players[1].is_active()) {
            (false, true) => PlayerId::Second,
            _ => PlayerId::First,
        };
        self.flag(first);
    }

    fn flag(&mut self, id: PlayerId) {
        for (index, player) in self.players.iter_mut().enumerate() {
            player.set_active(index == id.index());
        }
    }

    /// Remove all players.
    pub fn reset(&mut self) {
        self.players.clear();
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.players.len() == 2
    }

    /// The player whose turn it is, once both slots are filled.
    pub fn active(&self) -> Option<PlayerId> {
        if !self.is_complete() {
            return None;
        }
        self.players
            .iter()
            .position(Player::is_active)
            .and_then(PlayerId::from_index)
    }

    /// Make `id` active and its opponent inactive.
    pub fn set_active(&mut self, id: PlayerId) -> Result<(), GameError> {
        if !self.is_complete() {
            return Err(GameError::PlayersNotConfigured(self.players.len()));
        }
        self.flag(id);
        Ok(())
    }
}
