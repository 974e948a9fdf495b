//! Errors reported when building a sudoku from external input or from a
//! contradictory set of clues.

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes)
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("byte array contains cell values >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`](crate::Sudoku::from_bytes_slice)
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid cell values
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// Error for [`Sudoku::from_str_block`](crate::Sudoku::from_str_block)
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// A character other than the digits `0` to `9` was encountered
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number from 0..=80, counted row-major: 0..=8 for the first
        /// line, 9..=17 for the second and so on
        cell: u8,
        /// The offending character
        ch: char,
    },
    /// A puzzle row does not contain exactly 9 characters.
    /// Returns the index of the row (0-8)
    #[error("row {0} does not contain exactly 9 cells")]
    InvalidLineLength(u8),
    /// Input ends with less than 9 rows. Returns the number of rows found
    #[error("input contains {0} rows instead of the required 9")]
    NotEnoughRows(u8),
    /// More than 9 non-blank rows are supplied
    #[error("input contains more than 9 rows")]
    TooManyRows,
}

/// Error for [`Sudoku::solve`](crate::Sudoku::solve): the given clues already
/// violate the one-digit-per-row/column/block rule, so no board can be built
/// from the puzzle.
///
/// This is distinct from a well-formed puzzle without solutions, which is
/// the ordinary [`Solutions::None`](crate::Solutions::None) outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("clue {digit} at row {row}, column {col} conflicts with the other clues")]
pub struct ClueConflict {
    /// Row of the rejected clue, 0..=8
    pub row: u8,
    /// Column of the rejected clue, 0..=8
    pub col: u8,
    /// The clue digit, 1..=9
    pub digit: u8,
}
