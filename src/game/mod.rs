//! Core Connect Four game logic: board and gravity, four-in-a-row detection,
//! players and their registry, and the engine state machine that emits
//! events to the presentation layer.

mod board;
mod engine;
mod event;
mod player;
mod registry;
pub mod win;

pub use board::{Board, Cell, Drop, COLS, ROWS};
pub use engine::{GameEngine, GameStatus, RequestOutcome, MAX_STRATEGY_RETRIES};
pub use event::{EventSink, FnSink, GameEvent};
pub use player::{Player, PlayerId, PlayerKind, TokenColor};
pub use registry::{
    default_computer, default_human, human_pair, PlayerRegistry, DEFAULT_PLAYER1_COLOR,
    DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_COLOR, DEFAULT_PLAYER2_NAME, HUMAN_PLAYER1_COLOR,
    HUMAN_PLAYER1_NAME, HUMAN_PLAYER2_COLOR, HUMAN_PLAYER2_NAME,
};
pub use win::{is_winning_drop, winning_axes, Axis, WIN_LENGTH};
