use sudoku_backtrack::errors::FromBytesSliceError;
use sudoku_backtrack::parse_errors::{BlockParseError, LineParseError};
use sudoku_backtrack::{Cell, Sudoku};

const EASY_LINE: &str = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
const EASY_SOLUTION: &str =
    "854219763397865421261473985785126394649538172132947856926384517513792648478651239";

// the solution the ascending-digit search finds for an empty grid
const EMPTY_GRID_SOLUTION: &str =
    "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

// every row, column and block must contain 1..=9 exactly once
fn assert_valid_solution(sudoku: &Sudoku) {
    let bytes = sudoku.to_bytes();
    let house_digits = |cells: &[usize]| {
        let mut seen = [false; 10];
        for &cell in cells {
            seen[bytes[cell] as usize] = true;
        }
        (1..=9).all(|digit| seen[digit])
    };
    for house in 0..9 {
        let row: Vec<_> = (0..9).map(|col| house * 9 + col).collect();
        let col: Vec<_> = (0..9).map(|row| row * 9 + house).collect();
        let corner = house / 3 * 27 + house % 3 * 3;
        let block: Vec<_> = (0..9).map(|pos| corner + pos / 3 * 9 + pos % 3).collect();
        assert!(house_digits(&row), "row {} incomplete", house);
        assert!(house_digits(&col), "col {} incomplete", house);
        assert!(house_digits(&block), "block {} incomplete", house);
    }
}

#[test]
fn solve_1() {
    let sudoku_str = "___2___63
3____54_1
__1__398_
_______9_
___538___
_3_______
_263__5__
5_37____8
47___1___";

    let mut sudoku = Sudoku::from_str_block(sudoku_str).unwrap();
    assert!(sudoku.solve());
    assert_eq!(sudoku.to_str_line(), EASY_SOLUTION);
}

#[test]
fn solve_2() {
    let sudoku_str = "\
7__|4__|__2 comment
21_|3_5|46_
__9|_28|__1
----------- comment
___|542|3__
___|___|___
__5|817|___
-----------
5__|73_|9__
_63|2_4|_17
8__|__9|__3";

    let sudoku = Sudoku::from_str_block(sudoku_str).unwrap();
    let solution = sudoku.solution().unwrap();
    assert_eq!(
        solution.to_str_line(),
        "756491832218375469349628751197542386482963175635817294521736948963284517874159623"
    );
    assert_valid_solution(&solution);
}

#[test]
fn readme() {
    let sudoku_str = "\
___|2__|_63
3__|__5|4_1
__1|__3|98_
---+---+---
___|___|_9_
___|538|___
_3_|___|___
---+---+---
_26|3__|5__
5_3|7__|__8
47_|__1|___";

    let sudoku = Sudoku::from_str_block(sudoku_str).unwrap();
    let sudoku2 = Sudoku::from_str_line(EASY_LINE).unwrap();
    assert_eq!(sudoku, sudoku2);

    let solution = sudoku.solution().unwrap();
    let solution2 = sudoku2.solution().unwrap();
    assert_eq!(solution, solution2);
    println!("{}", solution.display_block());
    println!("{}", solution.to_str_line());
}

#[test]
#[should_panic]
fn wrong_format_1() {
    let sudoku_str = "___2___63
3____54_1
__1__398_
_______9_
___538___
_3_______
_263__5__
5_37____8";

    Sudoku::from_str_block(sudoku_str).unwrap();
}

#[test]
fn empty_grid_is_solvable() {
    let mut sudoku = Sudoku::from_bytes([0; 81]).unwrap();
    assert!(sudoku.solve());
    assert_eq!(sudoku.to_str_line(), EMPTY_GRID_SOLUTION);
    assert_valid_solution(&sudoku);
}

#[test]
fn solving_is_deterministic() {
    let first = Sudoku::from_str_line(EASY_LINE).unwrap().solution().unwrap();
    let second = Sudoku::from_str_line(EASY_LINE).unwrap().solution().unwrap();
    assert_eq!(first, second);
}

#[test]
fn already_solved_grid_is_left_unchanged() {
    let solved = Sudoku::from_str_line(EASY_SOLUTION).unwrap();
    let mut sudoku = solved;
    assert!(sudoku.solve());
    assert_eq!(sudoku, solved);
}

#[test]
fn single_empty_cell_gets_the_unique_digit() {
    let solved = Sudoku::from_str_line(EMPTY_GRID_SOLUTION).unwrap();
    let mut bytes = solved.to_bytes();
    bytes[40] = 0;
    let mut sudoku = Sudoku::from_bytes(bytes).unwrap();
    assert!(sudoku.solve());
    assert_eq!(sudoku, solved);
}

#[test]
fn unsolvable_grid_is_restored() {
    // row 0 needs a 9 in its last cell, but column 8 already has one
    let line = "12345678..................9......................................................";
    let original = Sudoku::from_str_line(line).unwrap();
    assert!(original.is_consistent());

    let mut sudoku = original;
    assert!(!sudoku.solve());
    assert_eq!(sudoku, original);
    assert!(sudoku.solution().is_none());
}

#[test]
fn unsolvable_grid_with_deeper_search_is_restored() {
    // the easy puzzle with a 9 forced into the top left corner
    let line = "9..2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
    let original = Sudoku::from_str_line(line).unwrap();
    assert!(original.is_consistent());

    let mut sudoku = original;
    assert!(!sudoku.solve());
    assert_eq!(sudoku, original);
}

#[test]
fn solution_keeps_the_givens() {
    let sudoku = Sudoku::from_str_line(EASY_LINE).unwrap();
    let solution = sudoku.solution().unwrap();
    for (given, solved) in sudoku.iter().zip(solution.iter()) {
        if given.is_some() {
            assert_eq!(given, solved);
        }
    }
}

#[test]
fn is_solved_on_unsolved() {
    let sudoku = Sudoku::from_str_line(EASY_LINE).unwrap();
    assert!(!sudoku.is_solved());
}

#[test]
fn is_solved_on_solved() {
    let sudoku = Sudoku::from_str_line(EASY_SOLUTION).unwrap();
    assert!(sudoku.is_solved());
}

#[test]
fn conflicting_givens_are_reported_at_both_cells() {
    // two 5s in row 0, at columns 0 and 2
    let mut bytes = [0; 81];
    bytes[0] = 5;
    bytes[2] = 5;
    let sudoku = Sudoku::from_bytes(bytes).unwrap();

    assert!(!sudoku.is_consistent());
    assert!(!sudoku.cell_is_valid(Cell::new(0)));
    assert!(!sudoku.cell_is_valid(Cell::new(2)));
    assert_eq!(sudoku.conflicting_cells(), vec![Cell::new(0), Cell::new(2)]);
}

#[test]
fn consistent_givens_report_no_conflicts() {
    let sudoku = Sudoku::from_str_line(EASY_LINE).unwrap();
    assert!(sudoku.is_consistent());
    assert!(sudoku.conflicting_cells().is_empty());
}

#[test]
fn line_roundtrip() {
    let sudoku = Sudoku::from_str_line(EASY_LINE).unwrap();
    assert_eq!(Sudoku::from_str_line(&sudoku.to_str_line()).unwrap(), sudoku);
}

#[test]
fn block_roundtrip() {
    let sudoku = Sudoku::from_str_line(EASY_LINE).unwrap();
    let block = sudoku.display_block().to_string();
    assert_eq!(Sudoku::from_str_block(&block).unwrap(), sudoku);
}

#[test]
fn line_parse_errors() {
    assert_eq!(
        Sudoku::from_str_line("123"),
        Err(LineParseError::NotEnoughCells(3))
    );
    assert_eq!(
        Sudoku::from_str_line("12x"),
        Err(LineParseError::InvalidEntry(
            sudoku_backtrack::parse_errors::InvalidEntry { cell: 2, ch: 'x' }
        ))
    );

    let mut line = EASY_LINE.to_string();
    line.push('1');
    assert_eq!(Sudoku::from_str_line(&line), Err(LineParseError::TooManyCells));

    let commented = format!("{}comment", EASY_LINE);
    assert_eq!(
        Sudoku::from_str_line(&commented),
        Err(LineParseError::MissingCommentDelimiter)
    );

    let commented = format!("{} comment", EASY_LINE);
    assert!(Sudoku::from_str_line(&commented).is_ok());
}

#[test]
fn block_parse_errors() {
    let ten_rows = format!("{}\n123456789", EASY_SOLUTION_BLOCK);
    assert_eq!(
        Sudoku::from_str_block(&ten_rows),
        Err(BlockParseError::TooManyRows)
    );

    let long_row = "1234567891\n";
    assert_eq!(
        Sudoku::from_str_block(long_row),
        Err(BlockParseError::InvalidLineLength(0))
    );

    let short_row = "12345678\n";
    assert_eq!(
        Sudoku::from_str_block(short_row),
        Err(BlockParseError::InvalidLineLength(0))
    );
}

const EASY_SOLUTION_BLOCK: &str = "\
854|219|763
397|865|421
261|473|985
---+---+---
785|126|394
649|538|172
132|947|856
---+---+---
926|384|517
513|792|648
478|651|239";

#[test]
fn from_bytes_rejects_out_of_range_entries() {
    let mut bytes = [0; 81];
    bytes[17] = 10;
    assert!(Sudoku::from_bytes(bytes).is_err());
}

#[test]
fn from_bytes_slice_rejects_wrong_length() {
    match Sudoku::from_bytes_slice(&[0; 80]) {
        Err(FromBytesSliceError::WrongLength(80)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
