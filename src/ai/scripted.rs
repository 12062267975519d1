use std::collections::VecDeque;

use crate::game::Board;

use super::strategy::ColumnStrategy;

/// Replays a fixed list of columns, then falls back to the leftmost column
/// that is not full.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    columns: VecDeque<usize>,
}

impl ScriptedStrategy {
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        ScriptedStrategy {
            columns: columns.into_iter().collect(),
        }
    }

    /// Columns not yet played.
    pub fn remaining(&self) -> usize {
        self.columns.len()
    }
}

impl ColumnStrategy for ScriptedStrategy {
    fn select_column(&mut self, board: &Board) -> usize {
        match self.columns.pop_front() {
            Some(column) => column,
            None => board.legal_columns().first().copied().unwrap_or(0),
        }
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PlayerId, TokenColor, ROWS};

    #[test]
    fn test_scripted_replays_in_order() {
        let board = Board::new();
        let mut strategy = ScriptedStrategy::new([4, 1, 6]);
        assert_eq!(strategy.select_column(&board), 4);
        assert_eq!(strategy.select_column(&board), 1);
        assert_eq!(strategy.remaining(), 1);
        assert_eq!(strategy.select_column(&board), 6);
    }

    #[test]
    fn test_exhausted_script_picks_leftmost_legal() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_into(0, PlayerId::First, TokenColor::Red).unwrap();
        }
        let mut strategy = ScriptedStrategy::default();
        assert_eq!(strategy.select_column(&board), 1);
    }
}
