//! A game-tree search agent for the board game 'Simacogo'
//!
//! Simacogo is played like Connect 4: pieces are dropped into a column and
//! settle on top of the stack already there. Instead of forming lines, each
//! placed piece earns its owner points for every matching piece around it,
//! 2 for an orthogonal neighbour and 1 for a diagonal one. The game ends when
//! the board is full.
//!
//! The computer always plays `O` and maximizes `O score - X score`.
//!
//! # Basic Usage
//!
//! ```
//! use simacogo_ai::{node::GameNode, search::{Searcher, SearchOptions}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human (X) has dropped a piece in the middle column
//! let node = GameNode::from_moves("5")?;
//! let mut searcher = Searcher::new(SearchOptions::default());
//! let column = searcher.decide(&node)?;
//!
//! assert!(column < simacogo_ai::BOARD_SIZE);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod board;

pub mod score;

pub mod terminal;

pub mod node;

pub mod search;


pub use error::GameError;

/// The width and height of the square game board in tiles
pub const BOARD_SIZE: usize = 9;

/// The number of tiles on the board
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

// a board needs neighbours to score, and columns are entered as single digits
const_assert!(BOARD_SIZE >= 2);
const_assert!(BOARD_SIZE <= 9);
