//! Game tree vertices and move generation

use std::fmt;

use crate::{
    board::{Board, Marker},
    error::GameError,
    score::move_points,
    terminal, BOARD_SIZE,
};

/// A placed piece: where it landed and who placed it
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Action {
    pub row: usize,
    pub column: usize,
    pub mover: Marker,
}

impl Action {
    pub fn new(row: usize, column: usize, mover: Marker) -> Self {
        Self { row, column, mover }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row: {}, column: {}, player: {}",
            self.row, self.column, self.mover
        )
    }
}

/// A position in the game tree
///
/// Owns its board, the action that produced it (`None` for the starting
/// position) and the cumulative score of each side. Children are generated
/// fresh on every call to [`GameNode::children`] and are never cached.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameNode {
    board: Board,
    action: Option<Action>,
    x_score: i32,
    o_score: i32,
    num_moves: usize,
}

/// Creates the starting position: an empty board and both scores at zero
pub fn new_game() -> GameNode {
    GameNode::new()
}

impl GameNode {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            action: None,
            x_score: 0,
            o_score: 0,
            num_moves: 0,
        }
    }

    /// Replays a sequence of 1-indexed column digits, X moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, GameError> {
        let mut node = Self::new();
        let mut mover = Marker::X;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if (1..=BOARD_SIZE).contains(&column) => {
                    node = node.apply_move(column - 1, mover)?;
                    mover = mover.opponent();
                }
                _ => return Err(GameError::Parse(column_char)),
            }
        }
        Ok(node)
    }

    /// Drops `marker` into `column`, returning the resulting position
    ///
    /// The points for the placement are scored against the board before the
    /// drop and added to `marker`'s cumulative score. `self` is left unchanged.
    pub fn apply_move(&self, column: usize, marker: Marker) -> Result<GameNode, GameError> {
        if column >= BOARD_SIZE {
            return Err(GameError::InvalidColumn { column });
        }
        let row = self
            .board
            .drop_row(column)
            .ok_or(GameError::ColumnFull { column })?;
        let board = self.board.drop(column, marker)?;
        Ok(self.child(board, Action::new(row, column, marker)))
    }

    fn child(&self, board: Board, action: Action) -> GameNode {
        let points = move_points(&self.board, action.row, action.column, action.mover);
        let (mut x_score, mut o_score) = (self.x_score, self.o_score);
        match action.mover {
            Marker::X => x_score += points,
            Marker::O => o_score += points,
        }
        GameNode {
            board,
            action: Some(action),
            x_score,
            o_score,
            num_moves: self.num_moves + 1,
        }
    }

    /// Expands every legal move for the side to move, by increasing column
    pub fn children(&self) -> Vec<GameNode> {
        let mover = self.next_mover();
        self.board
            .legal_moves()
            .filter_map(|(row, column)| {
                // legal_moves only yields open columns
                let board = self.board.drop(column, mover).ok()?;
                Some(self.child(board, Action::new(row, column, mover)))
            })
            .collect()
    }

    /// The side that places the next piece
    ///
    /// Sides alternate; from the starting position `O` moves.
    pub fn next_mover(&self) -> Marker {
        match self.action {
            Some(action) => action.mover.opponent(),
            None => Marker::O,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this position, `None` for the starting position
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    pub fn x_score(&self) -> i32 {
        self.x_score
    }

    pub fn o_score(&self) -> i32 {
        self.o_score
    }

    pub fn score(&self, marker: Marker) -> i32 {
        match marker {
            Marker::X => self.x_score,
            Marker::O => self.o_score,
        }
    }

    /// Static evaluation from O's point of view
    pub fn evaluation(&self) -> i32 {
        self.o_score - self.x_score
    }

    /// The number of pieces placed since the starting position
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn is_terminal(&self) -> bool {
        terminal::is_terminal(&self.board)
    }
}

impl Default for GameNode {
    fn default() -> Self {
        Self::new()
    }
}
