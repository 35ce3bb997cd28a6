//! Types for cells, digits and other things on a sudoku board
mod digit;
pub mod positions;
mod sudoku;

pub(crate) use self::positions::{block, col, row};

pub use self::{
    digit::Digit,
    positions::{Block, Cell, Col, Row},
    sudoku::{BlockDisplay, Sudoku},
};
