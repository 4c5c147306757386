use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::{GridError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A single grid cell. On the wire an empty cell is `""` (or `null` on input)
/// and an occupied cell carries its owner's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "&'static str")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the marker in this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

impl TryFrom<Option<String>> for Cell {
    type Error = GridError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value.as_deref() {
            None | Some("") => Ok(Cell::Empty),
            Some(marker) => marker.parse::<Player>().map(Player::to_cell),
        }
    }
}

impl From<Cell> for &'static str {
    fn from(cell: Cell) -> Self {
        cell.owner().map_or("", Player::marker)
    }
}

/// The 6x7 playing grid. Row 0 is the top, row 5 is the bottom.
///
/// `Board` is a plain value: every engine stage takes a board by reference and
/// returns a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
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

    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Lowest empty row in a column (where a piece would land)
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// True when no column holds an empty cell beneath an occupied one.
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            let mut seen_piece = false;
            for row in 0..ROWS {
                let occupied = !self.cells[row][col].is_empty();
                if seen_piece && !occupied {
                    return false;
                }
                seen_piece |= occupied;
            }
            true
        })
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != ROWS {
            return Err(GridError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != COLS {
                return Err(GridError::ColumnCount {
                    row: r,
                    found: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                board.cells[r][c] = cell;
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

/// One line per row, top first: `R` red, `Y` yellow, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Build a board from a diagram in the same notation `Display` produces.
#[cfg(test)]
pub(crate) fn board_from_diagram(rows: [&str; ROWS]) -> Board {
    let mut board = Board::new();
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), COLS, "row {r} must have {COLS} cells");
        for (c, ch) in line.chars().enumerate() {
            board.cells[r][c] = match ch {
                'R' => Cell::Red,
                'Y' => Cell::Yellow,
                '.' => Cell::Empty,
                other => panic!("unexpected cell {other:?} in diagram"),
            };
        }
    }
    board
}
