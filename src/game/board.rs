use crate::error::GameError;

use super::player::{PlayerId, TokenColor};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

/// A single successful placement: where the token came to rest and whose
/// it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub color: TokenColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Unchecked lookup for callers that already validated the coordinates.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        if row >= ROWS || column >= COLS {
            return Err(GameError::InvalidCell { row, column });
        }
        Ok(self.cells[row][column])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> Result<bool, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }
        Ok(self.top_occupied(column))
    }

    fn top_occupied(&self, col: usize) -> bool {
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.top_occupied(col))
    }

    pub fn is_empty(&self) -> bool {
        (0..COLS).all(|col| self.cells[ROWS - 1][col] == Cell::Empty)
    }

    /// Number of tokens stacked in a column.
    pub fn height(&self, column: usize) -> Result<usize, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }
        Ok((0..ROWS)
            .rev()
            .take_while(|&row| self.cells[row][column] != Cell::Empty)
            .count())
    }

    /// Columns that can still take a token, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.top_occupied(col)).collect()
    }

    /// Drop a token into a column and return where it landed
    pub fn drop_into(
        &mut self,
        column: usize,
        player: PlayerId,
        color: TokenColor,
    ) -> Result<Drop, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn(column));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = Cell::Occupied(player);
                return Ok(Drop {
                    row,
                    column,
                    player,
                    color,
                });
            }
        }

        Err(GameError::ColumnFull(column))
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Build a board from text rows, top row first: `X` for the first
    /// player, `O` for the second, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(COLS).enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Cell::Occupied(PlayerId::First),
                    'O' => Cell::Occupied(PlayerId::Second),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::First;
    const P2: PlayerId = PlayerId::Second;

    fn drop(board: &mut Board, col: usize, player: PlayerId) -> Drop {
        let color = match player {
            PlayerId::First => TokenColor::Red,
            PlayerId::Second => TokenColor::Black,
        };
        board.drop_into(col, player, color).unwrap()
    }

    /// Every column must be a contiguous stack from the bottom row.
    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            let mut seen_empty = false;
            for row in (0..ROWS).rev() {
                if board.get(row, col).is_empty() {
                    seen_empty = true;
                } else {
                    assert!(!seen_empty, "floating token at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.cell_at(row, col).unwrap(), Cell::Empty);
            }
        }
        assert!(board.is_empty());
        assert_eq!(board.legal_columns(), (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn test_drop_into() {
        let mut board = Board::new();

        // First token in column 3 lands at the bottom
        let first = drop(&mut board, 3, P1);
        assert_eq!((first.row, first.column), (5, 3));
        assert_eq!(first.player, P1);
        assert_eq!(first.color, TokenColor::Red);
        assert_eq!(board.cell_at(5, 3).unwrap(), Cell::Occupied(P1));

        // Second token stacks on top of it
        let second = drop(&mut board, 3, P2);
        assert_eq!(second.row, 4);
        assert_eq!(board.cell_at(4, 3).unwrap(), Cell::Occupied(P2));
        assert_eq!(board.height(3).unwrap(), 2);
    }

    #[test]
    fn test_drop_rests_on_lowest_empty_row_and_grows_height() {
        let mut board = Board::new();
        let sequence = [0, 6, 3, 3, 0, 2, 3, 6, 6, 1, 3, 3, 3, 5, 4];
        for (i, &col) in sequence.iter().enumerate() {
            let player = if i % 2 == 0 { P1 } else { P2 };
            let before = board.height(col).unwrap();
            if before == ROWS {
                assert_eq!(
                    board.drop_into(col, player, TokenColor::Red),
                    Err(GameError::ColumnFull(col))
                );
                continue;
            }
            let placed = drop(&mut board, col, player);
            assert_eq!(placed.row, ROWS - 1 - before);
            assert_eq!(board.height(col).unwrap(), before + 1);
            assert_gravity(&board);
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for i in 0..ROWS {
            assert!(!board.is_column_full(0).unwrap());
            drop(&mut board, 0, if i % 2 == 0 { P1 } else { P2 });
        }

        assert!(board.is_column_full(0).unwrap());
        assert_eq!(
            board.drop_into(0, P2, TokenColor::Black),
            Err(GameError::ColumnFull(0))
        );
        assert!(!board.legal_columns().contains(&0));
    }

    #[test]
    fn test_column_full_iff_top_row_occupied() {
        let board = Board::from_rows([
            "X..O...", "X..O...", "O..X...", "X..O..X", "O.XX..O", "XOOX.XO",
        ]);
        for col in 0..COLS {
            assert_eq!(
                board.is_column_full(col).unwrap(),
                !board.cell_at(0, col).unwrap().is_empty()
            );
        }
        assert_eq!(board.legal_columns(), vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_into(7, P1, TokenColor::Red),
            Err(GameError::InvalidColumn(7))
        );
        assert_eq!(board.is_column_full(COLS), Err(GameError::InvalidColumn(COLS)));
        assert_eq!(board.height(8), Err(GameError::InvalidColumn(8)));
        assert_eq!(
            board.cell_at(ROWS, 0),
            Err(GameError::InvalidCell { row: ROWS, column: 0 })
        );
        assert_eq!(
            board.cell_at(0, COLS),
            Err(GameError::InvalidCell { row: 0, column: COLS })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                drop(&mut board, col, P1);
            }
        }
        assert!(board.is_full());
        assert!((0..COLS).all(|col| board.is_column_full(col).unwrap()));
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_full_iff_every_column_full() {
        let almost = Board::from_rows([
            "XOXOXO.", "XOXOXOX", "OXOXOXO", "XOXOXOX", "OXOXOXO", "XOXOXOX",
        ]);
        assert!(!almost.is_full());
        assert!(!almost.is_column_full(6).unwrap());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        drop(&mut board, 2, P1);
        drop(&mut board, 2, P2);
        board.clear();
        assert_eq!(board, Board::new());
    }
}
