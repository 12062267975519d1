//! Four-in-a-row detection around the most recent drop.
//!
//! Only lines through the new token are examined: a fresh win can only be
//! formed through the cell that was just filled.

use super::board::{Board, Cell, Drop, COLS, ROWS};
use super::player::PlayerId;

/// Tokens in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// One of the four line orientations checked for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right, `\`
    DiagonalDown,
    /// Top-right to bottom-left, `/`
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Step in the positive direction as (row delta, column delta).
    fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Count consecutive cells owned by `player`, starting at (row, col)
/// inclusive and stepping by (dr, dc) until a mismatch or the edge.
fn count_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: PlayerId,
) -> usize {
    let mut count = 0;
    let mut r = row as isize;
    let mut c = col as isize;
    while r >= 0
        && c >= 0
        && (r as usize) < ROWS
        && (c as usize) < COLS
        && board.get(r as usize, c as usize) == Cell::Occupied(player)
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Length of the run through the drop along one axis, the drop counted once.
pub fn run_length(board: &Board, drop: &Drop, axis: Axis) -> usize {
    let (dr, dc) = axis.delta();
    let forward = count_from(board, drop.row, drop.column, dr, dc, drop.player);
    let backward = count_from(board, drop.row, drop.column, -dr, -dc, drop.player);
    (forward + backward).saturating_sub(1)
}

/// Every axis on which the drop completes a run of at least [`WIN_LENGTH`].
///
/// A single drop can finish more than one line at once; no axis takes
/// precedence over another.
pub fn winning_axes(board: &Board, drop: &Drop) -> Vec<Axis> {
    Axis::ALL
        .into_iter()
        .filter(|&axis| run_length(board, drop, axis) >= WIN_LENGTH)
        .collect()
}

/// Check if the drop connected four for its player on any axis.
pub fn is_winning_drop(board: &Board, drop: &Drop) -> bool {
    Axis::ALL
        .into_iter()
        .any(|axis| run_length(board, drop, axis) >= WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TokenColor;

    fn drop_at(board: &Board, row: usize, column: usize) -> Drop {
        let player = board
            .get(row, column)
            .owner()
            .expect("test drop must point at an occupied cell");
        Drop {
            row,
            column,
            player,
            color: TokenColor::Red,
        }
    }

    fn mirror(rows: [&str; ROWS]) -> [String; ROWS] {
        rows.map(|line| line.chars().rev().collect())
    }

    fn mirrored_board(rows: [&str; ROWS]) -> Board {
        let mirrored = mirror(rows);
        Board::from_rows([
            mirrored[0].as_str(),
            mirrored[1].as_str(),
            mirrored[2].as_str(),
            mirrored[3].as_str(),
            mirrored[4].as_str(),
            mirrored[5].as_str(),
        ])
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XXXX...",
        ]);
        // Middle of the line counts both directions
        let drop = drop_at(&board, 5, 2);
        assert!(is_winning_drop(&board, &drop));
        assert_eq!(winning_axes(&board, &drop), vec![Axis::Horizontal]);
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 4);
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows([
            ".......", ".......", "...O...", "...O...", "...O...", "...O...",
        ]);
        let drop = drop_at(&board, 2, 3);
        assert!(is_winning_drop(&board, &drop));
        assert_eq!(winning_axes(&board, &drop), vec![Axis::Vertical]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows([
            ".......", ".......", "...X...", "...OX..", "...OOX.", "...OOOX",
        ]);
        let drop = drop_at(&board, 2, 3);
        assert_eq!(winning_axes(&board, &drop), vec![Axis::DiagonalDown]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = Board::from_rows([
            ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOO...",
        ]);
        let drop = drop_at(&board, 2, 3);
        assert_eq!(winning_axes(&board, &drop), vec![Axis::DiagonalUp]);
    }

    #[test]
    fn test_no_win_with_three() {
        let board = Board::from_rows([
            ".......", ".......", ".......", "X......", "X......", "XXX.OOO",
        ]);
        let drop = drop_at(&board, 5, 0);
        assert!(!is_winning_drop(&board, &drop));
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 3);
        assert_eq!(run_length(&board, &drop, Axis::Vertical), 3);
    }

    #[test]
    fn test_crossing_short_runs_do_not_win() {
        // Runs of two straight and three diagonally through (4, 3), none reaching four.
        let board = Board::from_rows([
            ".......", ".......", ".......", "..XXX..", "..XXO..", "..X.X..",
        ]);
        let drop = drop_at(&board, 4, 3);
        assert!(!is_winning_drop(&board, &drop));
        assert!(Axis::ALL
            .iter()
            .all(|&axis| run_length(&board, &drop, axis) < WIN_LENGTH));
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 2);
        assert_eq!(run_length(&board, &drop, Axis::Vertical), 2);
        assert_eq!(run_length(&board, &drop, Axis::DiagonalDown), 3);
        assert_eq!(run_length(&board, &drop, Axis::DiagonalUp), 3);
    }

    #[test]
    fn test_opponent_tokens_break_a_run() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XXOXX..",
        ]);
        let drop = drop_at(&board, 5, 3);
        assert!(!is_winning_drop(&board, &drop));
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 2);
    }

    #[test]
    fn test_filling_a_gap_makes_five() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", ".XXXXX.",
        ]);
        let drop = drop_at(&board, 5, 3);
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 5);
        assert!(is_winning_drop(&board, &drop));
    }

    #[test]
    fn test_single_drop_completes_two_lines() {
        // Top of column 3 finishes a vertical and a `\` diagonal together.
        let board = Board::from_rows([
            ".......", ".......", "...X...", "...XX..", "...XOX.", "O..XOOX",
        ]);
        let drop = drop_at(&board, 2, 3);
        assert_eq!(
            winning_axes(&board, &drop),
            vec![Axis::Vertical, Axis::DiagonalDown]
        );
    }

    #[test]
    fn test_detection_symmetric_under_mirroring() {
        let layouts = [
            [
                ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOO...",
            ],
            [
                ".......", ".......", ".......", "..XXX..", "..XXO..", "..X.X..",
            ],
            [
                ".......", ".......", "O..X...", "O.XO...", "OXOOX..", "XOOXXXO",
            ],
            [
                "XOXOXOX", "OXOXOXO", "XOXOXOX", "XOXOXOX", "OXOXOXO", "XOXOXOX",
            ],
        ];

        for rows in layouts {
            let board = Board::from_rows(rows);
            let mirrored = mirrored_board(rows);
            for row in 0..ROWS {
                for col in 0..COLS {
                    if board.get(row, col).is_empty() {
                        continue;
                    }
                    let drop = drop_at(&board, row, col);
                    let flipped = drop_at(&mirrored, row, COLS - 1 - col);

                    assert_eq!(
                        is_winning_drop(&board, &drop),
                        is_winning_drop(&mirrored, &flipped),
                        "mirror mismatch at ({row}, {col})"
                    );
                    // Mirroring swaps the two diagonal directions.
                    assert_eq!(
                        run_length(&board, &drop, Axis::DiagonalDown),
                        run_length(&mirrored, &flipped, Axis::DiagonalUp)
                    );
                    assert_eq!(
                        run_length(&board, &drop, Axis::DiagonalUp),
                        run_length(&mirrored, &flipped, Axis::DiagonalDown)
                    );
                    assert_eq!(
                        run_length(&board, &drop, Axis::Horizontal),
                        run_length(&mirrored, &flipped, Axis::Horizontal)
                    );
                    assert_eq!(
                        run_length(&board, &drop, Axis::Vertical),
                        run_length(&mirrored, &flipped, Axis::Vertical)
                    );
                }
            }
        }
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", "XX.....", ".....XX",
        ]);
        let drop = drop_at(&board, 5, 6);
        assert_eq!(run_length(&board, &drop, Axis::Horizontal), 2);
        assert!(!is_winning_drop(&board, &drop));
    }
}
