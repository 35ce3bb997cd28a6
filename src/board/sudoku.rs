use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::parse_errors::{BlockParseError, InvalidEntry, LineParseError};
use crate::solver;

use std::{fmt, str};

/// The main structure exposing all the functionality of the library
///
/// Cells are stored in row-major order, `0` standing for an empty cell and
/// `1..=9` for an entered digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku([u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. All entries must be below 10.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a sudoku from a byte slice. The slice must be 81 long and
    /// all entries must be below 10.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(array)?)
    }

    /// Returns the cell contents as a byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format is 81 characters long, cells from left to right and
    /// top to bottom. `'0'`, `'.'` and `'_'` stand for an empty cell.
    /// Anything after the 81st cell is a comment and must be separated by a
    /// space or tab.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0u8;
        let mut chars = s.chars();
        for ch in &mut chars {
            grid[n_cells as usize] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch })),
            };
            n_cells += 1;
            if n_cells as usize == N_CELLS {
                break;
            }
        }
        if (n_cells as usize) < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        match chars.next() {
            None | Some(' ') | Some('\t') => Ok(Sudoku(grid)),
            Some('1'..='9') | Some('0') | Some('.') | Some('_') => Err(LineParseError::TooManyCells),
            Some(_) => Err(LineParseError::MissingCommentDelimiter),
        }
    }

    /// Reads a sudoku in the block format.
    ///
    /// The block format has one row of the sudoku per line. `'0'`, `'.'`
    /// and `'_'` stand for an empty cell, `'|'` field delimiters are
    /// ignored and lines starting with `'-'` (the horizontal field
    /// delimiters) are skipped. A comment after a complete row must be
    /// separated by a space or tab.
    pub fn from_str_block(s: &str) -> Result<Sudoku, BlockParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_rows = 0u8;
        for line in s.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('-') {
                continue;
            }
            if n_rows == 9 {
                return Err(BlockParseError::TooManyRows);
            }
            let mut n_cols = 0u8;
            for ch in line.chars() {
                let entry = match ch {
                    '|' => continue,
                    ' ' | '\t' if n_cols == 9 => break, // comment after a full row
                    '1'..='9' => ch as u8 - b'0',
                    '0' | '.' | '_' => 0,
                    _ if n_cols < 9 => {
                        return Err(BlockParseError::InvalidEntry(InvalidEntry {
                            cell: n_rows * 9 + n_cols,
                            ch,
                        }))
                    }
                    _ => return Err(BlockParseError::InvalidLineLength(n_rows)),
                };
                if n_cols == 9 {
                    return Err(BlockParseError::InvalidLineLength(n_rows));
                }
                grid[(n_rows * 9 + n_cols) as usize] = entry;
                n_cols += 1;
            }
            if n_cols < 9 {
                return Err(BlockParseError::InvalidLineLength(n_rows));
            }
            n_rows += 1;
        }
        if n_rows < 9 {
            return Err(BlockParseError::NotEnoughRows(n_rows));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the sudoku in the line format.
    pub fn to_str_line(&self) -> String {
        self.to_string()
    }

    /// Returns a type that formats the sudoku in the block format.
    pub fn display_block(&self) -> BlockDisplay<'_> {
        BlockDisplay(self)
    }

    /// Returns the digit at `cell`, `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.value(cell))
    }

    /// Returns an iterator over the cell contents, going from left to
    /// right, top to bottom. Empty cells yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&value| match value {
            0 => None,
            _ => Some(value),
        })
    }

    /// Try to find a solution to the sudoku and fill it in. Returns true if
    /// a solution was found, otherwise the sudoku is left unchanged.
    pub fn solve(&mut self) -> bool {
        solver::solve(self)
    }

    /// Try to find a solution to the sudoku. Returns `None` if no solution
    /// exists.
    pub fn solution(mut self) -> Option<Sudoku> {
        match self.solve() {
            true => Some(self),
            false => None,
        }
    }

    /// Checks whether the entry at `cell` conflicts with another cell in
    /// its row, column or block. Empty cells never conflict.
    pub fn cell_is_valid(&self, cell: Cell) -> bool {
        solver::is_valid(self, cell)
    }

    /// Checks whether no two entered digits conflict with each other.
    ///
    /// [`solve`](Sudoku::solve) does not check the given entries itself.
    /// Run this before solving to catch conflicting givens, which would
    /// otherwise only show up as a long and fruitless search.
    pub fn is_consistent(&self) -> bool {
        Cell::all().all(|cell| solver::is_valid(self, cell))
    }

    /// Returns all cells whose entry conflicts with another cell.
    pub fn conflicting_cells(&self) -> Vec<Cell> {
        Cell::all()
            .filter(|&cell| self.value(cell) != 0 && !solver::is_valid(self, cell))
            .collect()
    }

    /// Checks whether the sudoku is completely filled and free of conflicts.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&value| value != 0) && self.is_consistent()
    }

    pub(crate) fn value(&self, cell: Cell) -> u8 {
        self.0[cell.as_index()]
    }

    pub(crate) fn set_value(&mut self, cell: Cell, value: u8) {
        self.0[cell.as_index()] = value;
    }
}

impl str::FromStr for Sudoku {
    type Err = LineParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sudoku::from_str_line(s)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &value in self.0.iter() {
            match value {
                0 => f.write_str(".")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

/// Formats a [`Sudoku`] in the block format. Created by
/// [`Sudoku::display_block`].
pub struct BlockDisplay<'a>(&'a Sudoku);

impl fmt::Display for BlockDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, &value) in self.0 .0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (0, 0) => {}
                (3, 0) | (6, 0) => f.write_str("\n---+---+---\n")?,
                (_, 0) => f.write_str("\n")?,
                (_, 3) | (_, 6) => f.write_str("|")?,
                _ => {}
            }
            match value {
                0 => f.write_str("_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let line = String::deserialize(deserializer)?;
            Sudoku::from_str_line(&line).map_err(de::Error::custom)
        }
    }
}
