#![warn(missing_docs)]
//! A backtracking sudoku solver
//!
//! ## Overview
//!
//! This library solves 9x9 sudokus by exhaustive depth-first search with
//! row, column and block constraint checks. It deliberately contains no
//! strategy or candidate bookkeeping: the solver tries digits in ascending
//! order at the first empty cell, recurses, and backtracks. The solution
//! found for a given input is therefore always the same.
//!
//! ## Example
//!
//! ```
//! use sudoku_backtrack::Sudoku;
//!
//! let sudoku_block =
//! "___|2__|_63
//! 3__|__5|4_1
//! __1|__3|98_
//! ---+---+---
//! ___|___|_9_
//! ___|538|___
//! _3_|___|___
//! ---+---+---
//! _26|3__|5__
//! 5_3|7__|__8
//! 47_|__1|___";
//!
//! let sudoku_line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
//!
//! // Sudokus can be created from &str's in both block or line formats or directly from bytes.
//! let sudoku = Sudoku::from_str_block(sudoku_block).unwrap();
//! let mut sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//!
//! // Solve in place, or use `solution()` to keep the original around.
//! if sudoku.solve() {
//!     println!("{}", sudoku.display_block());
//!     println!("{}", sudoku);
//!
//!     let cell_contents: [u8; 81] = sudoku.to_bytes();
//! }
//! ```

pub mod board;
mod consts;
pub mod errors;
pub mod parse_errors;
pub mod solver;

pub use crate::board::{Cell, Digit, Sudoku};
