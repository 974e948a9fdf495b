#![warn(missing_docs)]
//! A sudoku solving library built on constraint propagation and backtracking
//! search, with uniqueness detection.
//!
//! ## Overview
//!
//! Puzzles are 9x9 grids holding the digits 1 to 9, with 0 marking empty
//! cells. The solver keeps per-row, per-column and per-block used-digit sets
//! plus per-block candidate positions for every digit. It enters forced
//! placements (hidden singles) until none remain, then guesses cell by cell,
//! copying the whole board before each guess so that backtracking is just
//! dropping the copy. The search can stop at the first solution or keep
//! going far enough to tell whether the solution is unique.
//!
//! ## Example
//!
//! ```
//! use unidoku::{Solutions, Sudoku};
//!
//! let puzzle = "\
//! 000809000
//! 008617400
//! 069000720
//! 740000065
//! 020000090
//! 890000072
//! 087000910
//! 005786200
//! 000401000";
//!
//! let sudoku = Sudoku::from_str_block(puzzle).unwrap();
//! match sudoku.solve().unwrap() {
//!     Solutions::Unique(solution) => println!("{}", solution),
//!     Solutions::Multiple(solution) => println!("not unique, e.g.:\n{}", solution),
//!     Solutions::None => println!("unsolvable"),
//! }
//! ```

mod bitset;
mod board;
mod consts;
pub mod errors;
mod helper;
mod solver;

pub use crate::board::{Digit, Sudoku};
pub use crate::solver::Solutions;
