//! Position types on the sudoku board
//!
//! Cells are numbered 0..=80 from left to right, top to bottom.
//! Rows, columns and blocks are numbered 0..=8; blocks go from left to
//! right, top to bottom as well.

use crate::consts::N_HOUSE_CELLS;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    row(cell) / 3 * 3 + col(cell) / 3
}

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            /// See the module documentation for the numbering scheme.
            pub struct $name(u8);

            impl $name {
                /// Constructs a new position.
                ///
                /// # Panic
                /// Panics, if the number is outside the valid range.
                pub fn new(num: u8) -> Self {
                    Self::new_checked(num).unwrap()
                }

                /// Constructs a new position, if the number is inside the valid range.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the position number contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the position number as `usize` for indexing.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all positions in ascending order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map($name)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
);

impl Cell {
    /// Constructs the cell at the intersection of `row` and `col`.
    pub fn from_row_col(row: Row, col: Col) -> Self {
        Cell(row.0 * 9 + col.0)
    }

    /// Returns the row of this cell.
    pub fn row(self) -> Row {
        Row(row(self.0))
    }

    /// Returns the column of this cell.
    pub fn col(self) -> Col {
        Col(col(self.0))
    }

    /// Returns the block (also called box or field) of this cell.
    pub fn block(self) -> Block {
        Block(block(self.0))
    }
}

impl Row {
    /// Returns an iterator over the cells of this row, left to right.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..N_HOUSE_CELLS).map(move |col| Cell(self.0 * 9 + col))
    }
}

impl Col {
    /// Returns an iterator over the cells of this column, top to bottom.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..N_HOUSE_CELLS).map(move |row| Cell(row * 9 + self.0))
    }
}

impl Block {
    /// Returns an iterator over the cells of this block, left to right, top to bottom.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let corner = self.0 / 3 * 27 + self.0 % 3 * 3;
        (0..N_HOUSE_CELLS).map(move |pos| Cell(corner + pos / 3 * 9 + pos % 3))
    }
}
