use std::fmt;
use std::str::FromStr;

use crate::{error::GameError, BOARD_SIZE, CELLS};

/// The symbol used for unoccupied tiles when printing a board
pub const EMPTY_SYMBOL: char = '\u{00B7}';

/// One of the two sides of the game
///
/// `X` is the human side and minimizes the evaluation, `O` is the computer
/// side and maximizes it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    X,
    O,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(&self) -> Option<Marker> {
        match self {
            Cell::X => Some(Marker::X),
            Cell::O => Some(Marker::O),
            Cell::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self.marker() {
            Some(marker) => marker.symbol(),
            None => EMPTY_SYMBOL,
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::X => Cell::X,
            Marker::O => Cell::O,
        }
    }
}

/// An immutable Simacogo board
///
/// Row 0 is the top of the board. Pieces fall towards row `BOARD_SIZE - 1`,
/// so the occupied cells of a column always form one run that ends at the
/// bottom row, and a column is full exactly when its row 0 is occupied.
///
/// `Board` is `Copy`: dropping a piece returns a new board and leaves the
/// original untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; CELLS], // cells are stored left-to-right, top-to-bottom
    heights: [usize; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            heights: [0; BOARD_SIZE],
        }
    }

    // no gravity check, the caller is responsible for a sensible layout
    pub(crate) fn from_cells(cells: [Cell; CELLS]) -> Self {
        let mut heights = [0; BOARD_SIZE];
        for (idx, cell) in cells.iter().enumerate() {
            if !cell.is_empty() {
                heights[idx % BOARD_SIZE] += 1;
            }
        }
        Self { cells, heights }
    }

    fn index(row: usize, column: usize) -> usize {
        column + BOARD_SIZE * row
    }

    /// Returns the contents of a tile, or `None` if the coordinate is off the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(self.cells[Self::index(row, column)])
        } else {
            None
        }
    }

    /// # Panics
    /// Panics if the coordinate is off the board
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(row < BOARD_SIZE && column < BOARD_SIZE);
        self.cells[Self::index(row, column)]
    }

    /// The number of pieces stacked in a column
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn playable(&self, column: usize) -> bool {
        column < BOARD_SIZE && self.cells[Self::index(0, column)].is_empty()
    }

    /// The row a piece dropped into `column` would land on
    pub fn drop_row(&self, column: usize) -> Option<usize> {
        if self.playable(column) {
            Some(BOARD_SIZE - 1 - self.heights[column])
        } else {
            None
        }
    }

    /// Returns a new board with `marker` placed at the lowest empty row of `column`
    pub fn drop(&self, column: usize, marker: Marker) -> Result<Board, GameError> {
        if column >= BOARD_SIZE {
            return Err(GameError::InvalidColumn { column });
        }
        let row = self
            .drop_row(column)
            .ok_or(GameError::ColumnFull { column })?;

        let mut next = *self;
        next.cells[Self::index(row, column)] = marker.into();
        next.heights[column] += 1;
        Ok(next)
    }

    /// All legal `(row, column)` placements, one per open column, by increasing column
    pub fn legal_moves(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE).filter_map(move |column| self.drop_row(column).map(|row| (row, column)))
    }

    pub fn num_pieces(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (1..=BOARD_SIZE).map(|x| x.to_string()).collect();
        write!(f, "{}", header.join(" "))?;
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "\n{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        write!(f, "{}", self)
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses a grid of `X`, `O` and `.`/`·` tiles, top row first
    ///
    /// Whitespace within a row is ignored and a row of column numbers (as
    /// printed by `Display`) is skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut row = 0;

        for line in s.lines() {
            let tiles: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if tiles.is_empty() || tiles.iter().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if row == BOARD_SIZE {
                return Err(GameError::InvalidBoard(format!(
                    "more than {} rows",
                    BOARD_SIZE
                )));
            }
            if tiles.len() != BOARD_SIZE {
                return Err(GameError::InvalidBoard(format!(
                    "row {} has {} tiles, expected {}",
                    row,
                    tiles.len(),
                    BOARD_SIZE
                )));
            }
            for (column, tile) in tiles.into_iter().enumerate() {
                cells[Board::index(row, column)] = match tile {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '.' | EMPTY_SYMBOL => Cell::Empty,
                    other => return Err(GameError::Parse(other)),
                };
            }
            row += 1;
        }
        if row != BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "{} rows, expected {}",
                row, BOARD_SIZE
            )));
        }

        // no empty tile may sit underneath a piece
        for column in 0..BOARD_SIZE {
            let mut occupied = false;
            for row in 0..BOARD_SIZE {
                match cells[Board::index(row, column)] {
                    Cell::Empty if occupied => {
                        return Err(GameError::InvalidBoard(format!(
                            "floating piece in column {}",
                            column + 1
                        )))
                    }
                    Cell::Empty => {}
                    _ => occupied = true,
                }
            }
        }

        Ok(Board::from_cells(cells))
    }
}
