use crate::game::Board;

/// Column choice for computer-controlled players.
///
/// The engine only asks for a column while at least one column can still
/// take a token. Returning a full column is tolerated: the engine reports it
/// and asks again.
pub trait ColumnStrategy {
    /// Pick a column (0-based) to drop into.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

impl<S: ColumnStrategy + ?Sized> ColumnStrategy for Box<S> {
    fn select_column(&mut self, board: &Board) -> usize {
        (**self).select_column(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
