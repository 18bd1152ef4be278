//! Adjacency scoring for a single placement

use crate::board::{Board, Cell, Marker};

/// Points for each matching tile directly above, below, left or right
pub const ORTHOGONAL_POINTS: i32 = 2;
/// Points for each matching tile on a diagonal
pub const DIAGONAL_POINTS: i32 = 1;

/// The most a single placement can earn
pub const MAX_MOVE_POINTS: i32 = 4 * ORTHOGONAL_POINTS + 4 * DIAGONAL_POINTS;

const NEIGHBOURS: [(isize, isize, i32); 8] = [
    (-1, 0, ORTHOGONAL_POINTS),
    (1, 0, ORTHOGONAL_POINTS),
    (0, -1, ORTHOGONAL_POINTS),
    (0, 1, ORTHOGONAL_POINTS),
    (-1, -1, DIAGONAL_POINTS),
    (-1, 1, DIAGONAL_POINTS),
    (1, 1, DIAGONAL_POINTS),
    (1, -1, DIAGONAL_POINTS),
];

/// Calculates the points earned by placing `marker` at `(row, column)`
///
/// `board` must be the position *before* the placement. Only the eight
/// surrounding tiles are examined, so the placed tile never scores against
/// itself. Neighbours off the edge of the board are worth nothing.
pub fn move_points(board: &Board, row: usize, column: usize, marker: Marker) -> i32 {
    let target = Cell::from(marker);

    NEIGHBOURS
        .iter()
        .filter_map(|&(dy, dx, points)| {
            let y = (row as isize).checked_add(dy)?;
            let x = (column as isize).checked_add(dx)?;
            if y < 0 || x < 0 {
                return None;
            }
            match board.get(y as usize, x as usize) {
                Some(cell) if cell == target => Some(points),
                _ => None,
            }
        })
        .sum()
}
