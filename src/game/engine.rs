use tracing::{debug, info, instrument, warn};

use crate::ai::{ColumnStrategy, RandomStrategy};
use crate::config::AppConfig;
use crate::error::GameError;

use super::board::{Board, COLS};
use super::event::{EventSink, GameEvent};
use super::player::{Player, PlayerId};
use super::registry::PlayerRegistry;
use super::win::is_winning_drop;

/// How many times a computer may pick a full column before the engine
/// takes the leftmost open column on its behalf.
pub const MAX_STRATEGY_RETRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

/// What a command left the engine waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The engine is not accepting drops (not started, or the game is over).
    Ignored,
    /// A human picked a full column and should choose again.
    ColumnFull,
    /// Waiting for this human player to drop.
    AwaitingTurn(PlayerId),
    Won(PlayerId),
    Draw,
}

/// Connect Four match: board, players, turn order and result.
///
/// Every state change is reported to the sink. Computer turns are played
/// synchronously, so a call returns only once a human has to act or the
/// game is over.
pub struct GameEngine<S: EventSink> {
    board: Board,
    registry: PlayerRegistry,
    status: GameStatus,
    starting_player: PlayerId,
    strategy: Box<dyn ColumnStrategy>,
    sink: S,
}

impl<S: EventSink> GameEngine<S> {
    /// Human-vs-Computer engine with the default players. Not started yet.
    pub fn new(sink: S, strategy: Box<dyn ColumnStrategy>) -> Self {
        GameEngine {
            board: Board::new(),
            registry: PlayerRegistry::human_vs_computer().unwrap_or_default(),
            status: GameStatus::NotStarted,
            starting_player: PlayerId::First,
            strategy,
            sink,
        }
    }

    /// Build an engine from configuration: players, starting player and the
    /// random strategy's seed.
    pub fn from_config(config: &AppConfig, sink: S) -> Result<Self, GameError> {
        let registry = config.build_registry()?;
        let strategy: Box<dyn ColumnStrategy> = match config.game.seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::new()),
        };
        Ok(GameEngine {
            board: Board::new(),
            starting_player: registry.active().unwrap_or(PlayerId::First),
            registry,
            status: GameStatus::NotStarted,
            strategy,
            sink,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        self.registry.players()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.registry.get(id)
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> Option<&Player> {
        self.registry.active().and_then(|id| self.registry.get(id))
    }

    pub fn active_id(&self) -> Option<PlayerId> {
        self.registry.active()
    }

    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Begin the first game. Only valid once; later calls are ignored.
    pub fn start(&mut self) -> Result<RequestOutcome, GameError> {
        if self.status != GameStatus::NotStarted {
            debug!(status = ?self.status, "start ignored");
            return Ok(RequestOutcome::Ignored);
        }
        info!("game started");
        self.status = GameStatus::InProgress;
        self.sink.emit(GameEvent::GameStarted);
        self.begin_turns()
    }

    /// Clear the board and hand the first turn to the starting player.
    pub fn restart(&mut self) -> Result<RequestOutcome, GameError> {
        self.board.clear();
        self.registry.set_active(self.starting_player)?;
        self.status = GameStatus::InProgress;
        info!(starting = ?self.starting_player, "game restarted");
        self.sink.emit(GameEvent::Restarted);
        self.begin_turns()
    }

    /// Replace the players with the default Human-vs-Human pair (`true`) or
    /// the default Human-vs-Computer pair (`false`), then restart.
    pub fn switch_mode(&mut self, human_vs_human: bool) -> Result<RequestOutcome, GameError> {
        if human_vs_human {
            self.registry.load_human_vs_human()?;
        } else {
            self.registry.load_human_vs_computer()?;
        }
        self.starting_player = self.registry.active().unwrap_or(PlayerId::First);
        info!(human_vs_human, "mode switched");
        self.sink.emit(GameEvent::ModeChanged);
        self.restart()
    }

    /// Replace the players with a custom pair, then restart.
    ///
    /// The pair is validated before anything changes: on a registry error the
    /// current players and game are kept.
    pub fn set_players(&mut self, first: Player, second: Player) -> Result<RequestOutcome, GameError> {
        let mut registry = PlayerRegistry::new();
        registry.register(first)?;
        registry.register(second)?;

        self.starting_player = registry.active().unwrap_or(PlayerId::First);
        self.registry = registry;
        info!(players = ?self.registry.players(), "players configured");
        self.sink.emit(GameEvent::ModeChanged);
        self.restart()
    }

    /// Make `id` the active player without emitting anything.
    pub fn set_active_player(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.registry.set_active(id)
    }

    /// Drop the active player's token into `column`.
    ///
    /// Out-of-range columns are an error. Requests before the game starts or
    /// after a win are ignored, and a request on a full board answers `Draw`
    /// without touching it. Everything else (full column, win) is reported
    /// through events and the returned outcome.
    ///
    /// When a computer holds the turn, its strategy picks the column and
    /// `column` is not used.
    #[instrument(level = "debug", skip(self))]
    pub fn request_drop(&mut self, column: usize) -> Result<RequestOutcome, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }
        match self.status {
            GameStatus::InProgress | GameStatus::Draw => {}
            GameStatus::NotStarted | GameStatus::Won(_) => {
                debug!(status = ?self.status, "drop ignored");
                return Ok(RequestOutcome::Ignored);
            }
        }
        if self.board.is_full() {
            return Ok(self.declare_draw());
        }

        let active = self.require_active()?;
        if self.is_computer(active) {
            debug!(column, "computer holds the turn, asking its strategy");
            let column = self.computer_column(0)?;
            return self.resolve(column);
        }
        self.resolve(column)
    }

    /// Announce the opening turn, letting a computer move right away.
    fn begin_turns(&mut self) -> Result<RequestOutcome, GameError> {
        match self.announce_turn()? {
            Some(column) => self.resolve(column),
            None => Ok(RequestOutcome::AwaitingTurn(self.require_active()?)),
        }
    }

    /// Place tokens until a human has to act or the game ends.
    fn resolve(&mut self, first_column: usize) -> Result<RequestOutcome, GameError> {
        let mut column = first_column;
        let mut retries = 0;

        loop {
            let active = self.require_active()?;

            if self.board.is_column_full(column)? {
                self.sink.emit(GameEvent::ColumnFull { column });
                if !self.is_computer(active) {
                    debug!(column, "column full, waiting for another choice");
                    return Ok(RequestOutcome::ColumnFull);
                }
                retries += 1;
                column = self.computer_column(retries)?;
                continue;
            }

            let color = self.require_player(active)?.color();
            let drop = self.board.drop_into(column, active, color)?;
            debug!(row = drop.row, column = drop.column, player = ?active, "token dropped");
            self.sink.emit(GameEvent::PlayerDropped(drop));

            if is_winning_drop(&self.board, &drop) {
                return self.declare_winner(active);
            }
            if self.board.is_full() {
                return Ok(self.declare_draw());
            }

            let next = active.other();
            self.registry.set_active(next)?;
            match self.announce_turn()? {
                Some(next_column) => {
                    column = next_column;
                    retries = 0;
                }
                None => return Ok(RequestOutcome::AwaitingTurn(next)),
            }
        }
    }

    /// For a computer, return its column. For a human, emit `PlayerTurn`.
    fn announce_turn(&mut self) -> Result<Option<usize>, GameError> {
        let active = self.require_active()?;
        let player = self.require_player(active)?;
        if player.is_computer() {
            return self.computer_column(0).map(Some);
        }
        let name = player.name().to_string();
        debug!(player = %name, "turn to move");
        self.sink.emit(GameEvent::PlayerTurn { name });
        Ok(None)
    }

    fn computer_column(&mut self, retries: usize) -> Result<usize, GameError> {
        if retries > MAX_STRATEGY_RETRIES {
            let fallback = self.board.legal_columns().first().copied().unwrap_or(0);
            warn!(
                strategy = self.strategy.name(),
                retries, fallback, "strategy kept picking full columns"
            );
            return Ok(fallback);
        }
        let column = self.strategy.select_column(&self.board);
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }
        Ok(column)
    }

    fn declare_winner(&mut self, id: PlayerId) -> Result<RequestOutcome, GameError> {
        let winner = self.require_player(id)?.name().to_string();
        info!(winner = %winner, "game won");
        self.status = GameStatus::Won(id);
        self.sink.emit(GameEvent::Won { winner });
        Ok(RequestOutcome::Won(id))
    }

    fn declare_draw(&mut self) -> RequestOutcome {
        info!("game drawn");
        self.status = GameStatus::Draw;
        self.sink.emit(GameEvent::Draw);
        RequestOutcome::Draw
    }

    fn is_computer(&self, id: PlayerId) -> bool {
        self.registry.get(id).is_some_and(Player::is_computer)
    }

    fn require_active(&self) -> Result<PlayerId, GameError> {
        self.registry
            .active()
            .ok_or(GameError::PlayersNotConfigured(self.registry.len()))
    }

    fn require_player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.registry
            .get(id)
            .ok_or(GameError::PlayersNotConfigured(self.registry.len()))
    }
}

impl GameEngine<Vec<GameEvent>> {
    /// Take the events collected so far.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.sink)
    }
}

impl Default for GameEngine<Vec<GameEvent>> {
    fn default() -> Self {
        Self::new(Vec::new(), Box::new(RandomStrategy::new()))
    }
}
