//! Types for cells, digits and grids of a sudoku board
mod digit;
mod positions;
mod sudoku;

pub(crate) use self::positions::{Block, Cell, Position};

pub use self::{digit::Digit, sudoku::Sudoku};
