use std::fmt;
use std::sync::mpsc;

use super::board::Drop;

/// Notifications emitted by the engine, in the order they occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Players were (re)configured.
    ModeChanged,
    GameStarted,
    PlayerTurn { name: String },
    PlayerDropped(Drop),
    /// A drop was rejected because the column has no empty cell.
    ColumnFull { column: usize },
    Won { winner: String },
    Draw,
    Restarted,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::ModeChanged => write!(f, "Mode switched!"),
            GameEvent::GameStarted => write!(f, "Game started!"),
            GameEvent::PlayerTurn { name } => write!(f, "{name}'s turn to move."),
            GameEvent::PlayerDropped(drop) => write!(
                f,
                "{} token dropped at row {}, column {}.",
                drop.color, drop.row, drop.column
            ),
            GameEvent::ColumnFull { column } => {
                write!(f, "Column {column} is full. Try other columns.")
            }
            GameEvent::Won { winner } => write!(f, "Congratulations! {winner} wins!"),
            GameEvent::Draw => write!(f, "Game draw. Press restart to start a new game!"),
            GameEvent::Restarted => write!(f, "Game restarted!"),
        }
    }
}

/// Receiver of engine notifications, supplied by the embedding code.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Collects events in memory, for callers that read them back in batches.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Forwards events over a channel. A hung-up receiver is ignored.
impl EventSink for mpsc::Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Adapts a closure into an [`EventSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: GameEvent) {
        (self.0)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PlayerId, TokenColor};

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.emit(GameEvent::GameStarted);
        sink.emit(GameEvent::Draw);
        assert_eq!(sink, vec![GameEvent::GameStarted, GameEvent::Draw]);
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = mpsc::channel();
        tx.emit(GameEvent::Restarted);
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Restarted);

        drop(rx);
        // Sending after the receiver is gone must not panic.
        tx.emit(GameEvent::Draw);
    }

    #[test]
    fn test_fn_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|event: GameEvent| seen.push(event.to_string()));
            sink.emit(GameEvent::ColumnFull { column: 3 });
        }
        assert_eq!(seen, vec!["Column 3 is full. Try other columns."]);
    }

    #[test]
    fn test_event_display() {
        let drop = Drop {
            row: 5,
            column: 0,
            player: PlayerId::First,
            color: TokenColor::Red,
        };
        assert_eq!(
            GameEvent::PlayerDropped(drop).to_string(),
            "red token dropped at row 5, column 0."
        );
        assert_eq!(
            GameEvent::Won {
                winner: "Player1".into()
            }
            .to_string(),
            "Congratulations! Player1 wins!"
        );
        assert_eq!(
            GameEvent::PlayerTurn {
                name: "John".into()
            }
            .to_string(),
            "John's turn to move."
        );
    }
}
