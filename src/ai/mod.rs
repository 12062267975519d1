//! Column selection for computer players.

mod random;
mod scripted;
mod strategy;

pub use random::RandomStrategy;
pub use scripted::ScriptedStrategy;
pub use strategy::ColumnStrategy;
