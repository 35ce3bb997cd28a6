//! The constraint checker and the backtracking search
//!
//! Solving works by walking the grid in row-major order to the first empty
//! cell, entering digits 1 through 9 in ascending order and recursing after
//! every entry that doesn't conflict with its row, column or block. Entries
//! that lead to a dead end are erased again before the next digit is tried,
//! so a failed search leaves the grid exactly as it was.
//!
//! This is deliberately the dumbest complete search: no candidate sets, no
//! cell ordering heuristics. It makes the found solution deterministic and
//! keeps the state down to the single caller-owned grid. Recursion depth is
//! bounded by the 81 cells of the board.

use crate::board::{Cell, Digit, Sudoku};

/// Checks whether the entry at `cell` conflicts with another cell in the
/// same row, column or block.
///
/// An empty cell is always valid. The cell itself is excluded from all
/// three comparisons, so a filled cell only ever conflicts with *other*
/// cells sharing one of its houses.
pub fn is_valid(sudoku: &Sudoku, cell: Cell) -> bool {
    let value = sudoku.value(cell);
    if value == 0 {
        return true;
    }

    cell.row()
        .cells()
        .chain(cell.col().cells())
        .chain(cell.block().cells())
        .filter(|&other| other != cell)
        .all(|other| sudoku.value(other) != value)
}

/// Attempts to complete the sudoku in place. Returns true if a solution was
/// found.
///
/// On failure the grid is restored to its state at the start of the call,
/// cell by cell. Already filled cells are never touched or re-checked;
/// callers that want to reject conflicting givens up front should run
/// [`Sudoku::is_consistent`] first.
pub fn solve(sudoku: &mut Sudoku) -> bool {
    let cell = match Cell::all().find(|&cell| sudoku.value(cell) == 0) {
        Some(cell) => cell,
        // no empty cell left, the grid is complete
        None => return true,
    };

    for digit in Digit::all() {
        sudoku.set_value(cell, digit.get());
        if is_valid(sudoku, cell) && solve(sudoku) {
            return true;
        }
        sudoku.set_value(cell, 0);
    }

    false
}
