use crate::BOARD_SIZE;

/// Errors reported by board and game-tree operations
///
/// Every variant is recoverable: the caller is expected to pick another
/// column, or to end the game on `NoLegalMove`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Columns are 0-indexed here, the message shows them 1-indexed
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error(
        "Invalid move, column {} out of range. Columns must be between 1 and {}",
        .column.saturating_add(1),
        BOARD_SIZE
    )]
    InvalidColumn { column: usize },

    #[error("no legal moves remain, the game is over")]
    NoLegalMove,

    #[error("could not parse '{0}' as a valid move")]
    Parse(char),

    #[error("invalid board: {0}")]
    InvalidBoard(String),
}
