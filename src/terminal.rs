//! End of game detection
//!
//! The game is over once no column can accept another piece.

use crate::{board::Board, BOARD_SIZE};

/// Checks the top row of every column
///
/// Gravity guarantees a column is full exactly when its top tile is
/// occupied, so this is equivalent to [`is_terminal_full`].
pub fn is_terminal(board: &Board) -> bool {
    (0..BOARD_SIZE).all(|column| !board.cell(0, column).is_empty())
}

/// Checks every tile on the board for an empty slot
pub fn is_terminal_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
