use std::fmt;

use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::errors::{ClueConflict, FromBytesError, FromBytesSliceError, GridParseError};
use crate::solver::{Solutions, SudokuSolver};

/// A 9x9 sudoku grid.
///
/// Cells hold the digits 1 to 9, or 0 for an empty cell. The grid is a plain
/// value type: it is `Copy`, solving never mutates it, and all solve methods
/// return fresh grids.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a block of 9 lines with 9 characters each,
    /// every character a digit and `0` marking an empty cell.
    ///
    /// Whitespace-only lines before and after the block are ignored, as is
    /// trailing whitespace on each line.
    pub fn from_str_block(s: &str) -> Result<Self, GridParseError> {
        let lines: Vec<&str> = s.lines().map(str::trim_end).collect();
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(start, |idx| idx + 1);
        let rows = &lines[start..end];

        if rows.len() > 9 {
            return Err(GridParseError::TooManyRows);
        }
        let mut grid = [0; N_CELLS];
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != 9 {
                return Err(GridParseError::InvalidLineLength(row as u8));
            }
            for (col, ch) in line.chars().enumerate() {
                match ch.to_digit(10) {
                    Some(digit) => grid[row * 9 + col] = digit as u8,
                    None => {
                        return Err(GridParseError::InvalidEntry {
                            cell: (row * 9 + col) as u8,
                            ch,
                        })
                    }
                }
            }
        }
        if rows.len() < 9 {
            return Err(GridParseError::NotEnoughRows(rows.len() as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Creates a sudoku from an array of 81 cell values in row-major order,
    /// `0` marking empty cells.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Self, FromBytesError> {
        if bytes.iter().all(|&byte| byte <= 9) {
            Ok(Sudoku(bytes))
        } else {
            Err(FromBytesError(()))
        }
    }

    /// Creates a sudoku from a slice of 81 cell values in row-major order,
    /// `0` marking empty cells.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Self, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Returns the cell values in row-major order, `0` marking empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the number of filled cells.
    pub fn n_clues(self) -> u8 {
        self.0.iter().filter(|&&digit| digit != 0).count() as u8
    }

    /// Returns an iterator over all cells in row-major order, `None` for
    /// empty cells.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&digit| Digit::new_checked(digit))
    }

    pub(crate) fn digit(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Solves the sudoku and reports whether the solution is unique.
    ///
    /// A clue set that already violates the one-digit-per-row/column/block
    /// rule is rejected with an error; a well-formed puzzle without solutions
    /// is the ordinary [`Solutions::None`] outcome.
    pub fn solve(self) -> Result<Solutions, ClueConflict> {
        let solver = SudokuSolver::from_sudoku(self)?;
        let mut solutions = solver.solve_at_most(2);
        Ok(match solutions.len() {
            0 => Solutions::None,
            1 => Solutions::Unique(solutions.swap_remove(0)),
            _ => Solutions::Multiple(solutions.swap_remove(0)),
        })
    }

    /// Finds a solution to the sudoku, stopping at the first one. Returns
    /// `None` if no solution exists; conflicting clues count as no solution.
    pub fn solve_one(self) -> Option<Sudoku> {
        self.solve_at_most(1).pop()
    }

    /// Solves the sudoku and returns the solution iff it is unique.
    pub fn solve_unique(self) -> Option<Sudoku> {
        let solutions = self.solve_at_most(2);
        match solutions.as_slice() {
            [solution] => Some(*solution),
            _ => None,
        }
    }

    /// Returns up to `limit` solutions, abandoning the search as soon as the
    /// limit is reached. No specific ordering of solutions is promised.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        match SudokuSolver::from_sudoku(self) {
            Ok(solver) => solver.solve_at_most(limit),
            Err(_) => Vec::new(),
        }
    }

    /// Checks whether the sudoku is completely filled without conflicts.
    pub fn is_solved(&self) -> bool {
        SudokuSolver::from_sudoku(*self).map_or(false, |solver| solver.is_filled())
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &digit) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(if idx % 9 == 0 { "\n" } else { " " })?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sudoku {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sudoku {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ByteVisitor;

        impl<'de> serde::de::Visitor<'de> for ByteVisitor {
            type Value = Sudoku;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("81 cell values of 0..=9")
            }

            fn visit_bytes<E: serde::de::Error>(self, bytes: &[u8]) -> Result<Sudoku, E> {
                Sudoku::from_bytes_slice(bytes).map_err(E::custom)
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Sudoku, A::Error> {
                let mut bytes = Vec::with_capacity(N_CELLS);
                while let Some(byte) = seq.next_element()? {
                    bytes.push(byte);
                }
                Sudoku::from_bytes_slice(&bytes).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(ByteVisitor)
    }
}
