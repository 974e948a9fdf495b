//! The solving engine: constraint bookkeeping, hidden-single propagation and
//! backtracking search.
//!
//! Board state lives in [`SudokuSolver`], a plain value made of fixed-size
//! arrays. Besides the grid itself it tracks which digits every row, column
//! and block already contain and, for every (block, digit) pair, the local
//! positions the digit can no longer occupy. A digit left with a single free
//! position in a block is a hidden single and gets placed without guessing;
//! a digit left with none while unplaced proves the board dead.
//!
//! Nothing in here ever undoes a placement. Guessing copies the whole board
//! and failed branches are dropped, so any `SudokuSolver` that has returned
//! an error is inconsistent and must not be reused.

use crate::bitset::Set;
use crate::board::{Block, Cell, Digit, Position, Sudoku};
use crate::consts::N_CELLS;
use crate::errors::ClueConflict;
use crate::helper::{BlockArray, CellArray, DigitArray, Unsolvable};

/// Outcome of [`Sudoku::solve`]: did the puzzle have zero, one or several
/// solutions?
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Solutions {
    /// The puzzle has no solution.
    None,
    /// The puzzle has exactly this solution.
    Unique(Sudoku),
    /// The puzzle has at least two solutions; the first one found is kept.
    Multiple(Sudoku),
}

impl Solutions {
    /// The solved grid, unless the puzzle was unsolvable.
    pub fn grid(self) -> Option<Sudoku> {
        match self {
            Solutions::None => None,
            Solutions::Unique(grid) | Solutions::Multiple(grid) => Some(grid),
        }
    }

    /// Whether exactly one solution exists.
    pub fn is_unique(self) -> bool {
        matches!(self, Solutions::Unique(_))
    }
}

// Work state for the recursive search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SudokuSolver {
    grid: CellArray<u8>,
    row_used: [Set<Digit>; 9],
    col_used: [Set<Digit>; 9],
    block_used: BlockArray<Set<Digit>>,
    // excluded[block][digit] holds the local positions that can no longer
    // take `digit`. One free position left is a hidden single; none left
    // while the digit is unplaced in the block is a contradiction.
    excluded: BlockArray<DigitArray<Set<Position>>>,
    n_empty: u8,
}

impl SudokuSolver {
    pub fn from_sudoku(sudoku: Sudoku) -> Result<Self, ClueConflict> {
        let mut solver = SudokuSolver {
            grid: CellArray([0; N_CELLS]),
            row_used: [Set::NONE; 9],
            col_used: [Set::NONE; 9],
            block_used: BlockArray([Set::NONE; 9]),
            excluded: BlockArray([DigitArray([Set::NONE; 9]); 9]),
            n_empty: N_CELLS as u8,
        };
        for cell in Cell::all() {
            if let Some(digit) = sudoku.digit(cell) {
                if solver.place(cell, digit).is_err() {
                    return Err(ClueConflict {
                        row: cell.row(),
                        col: cell.col(),
                        digit: digit.get(),
                    });
                }
            }
        }
        Ok(solver)
    }

    pub fn is_filled(&self) -> bool {
        self.n_empty == 0
    }

    pub fn to_sudoku(&self) -> Sudoku {
        Sudoku(self.grid.0)
    }

    /// Enters `digit` into `cell` and updates every constraint set.
    ///
    /// Re-placing the digit a cell already holds is a no-op. Fails if the
    /// cell holds a different digit, if one of the cell's houses already
    /// contains `digit`, or if an exclusion leaves some digit without a
    /// position in a block where it is unplaced. On failure the state is
    /// partially updated and must be dropped.
    fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), Unsolvable> {
        match self.grid[cell] {
            0 => {}
            held if held == digit.get() => return Ok(()),
            _ => return Err(Unsolvable),
        }
        self.grid[cell] = digit.get();
        self.n_empty -= 1;

        let (row, col) = (cell.row(), cell.col());
        let block = cell.block();
        if !self.row_used[row as usize].insert(digit)
            || !self.col_used[col as usize].insert(digit)
            || !self.block_used[block].insert(digit)
        {
            return Err(Unsolvable);
        }

        // The digit claims every position in its block, the occupied cell
        // refuses every digit.
        for pos in Position::all() {
            self.excluded[block][digit].insert(pos);
        }
        let local = cell.position_in_block();
        for other in Digit::all() {
            self.exclude(block, other, local)?;
        }
        // Shut the digit out of the rest of the row and the column.
        for c in 0..9 {
            let peer = Cell::from_coords(row, c);
            self.exclude(peer.block(), digit, peer.position_in_block())?;
        }
        for r in 0..9 {
            let peer = Cell::from_coords(r, col);
            self.exclude(peer.block(), digit, peer.position_in_block())?;
        }
        Ok(())
    }

    // Rules out `digit` at `pos` inside `block`. Fails iff this leaves the
    // digit without any position in a block that does not contain it yet.
    fn exclude(&mut self, block: Block, digit: Digit, pos: Position) -> Result<(), Unsolvable> {
        if self.excluded[block][digit].insert(pos)
            && self.excluded[block][digit].n_free() == 0
            && !self.block_used[block].contains(digit)
        {
            return Err(Unsolvable);
        }
        Ok(())
    }

    /// Enters hidden singles until a full sweep places nothing.
    ///
    /// Purely deductive: every placement made here is forced, so a filled
    /// board coming out of propagation alone is already a valid solution.
    fn propagate(&mut self) -> Result<(), Unsolvable> {
        loop {
            let mut placed = false;
            for block in Block::all() {
                for digit in Digit::all() {
                    if let Some(pos) = self.excluded[block][digit].sole_free() {
                        self.place(block.cell_at(pos), digit)?;
                        placed = true;
                    }
                }
            }
            if !placed {
                return Ok(());
            }
        }
    }

    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        let mut solutions = Vec::new();
        if limit > 0 {
            self.search(0, limit, &mut solutions);
        }
        solutions
    }

    // Returns true once `limit` solutions exist and the search should stop
    // unwinding entirely, not just abandon the current branch.
    fn search(mut self, start: u8, limit: usize, solutions: &mut Vec<Sudoku>) -> bool {
        if self.propagate().is_err() {
            return false;
        }
        if self.n_empty == 0 {
            solutions.push(self.to_sudoku());
            return solutions.len() >= limit;
        }
        // Cells below `start` were filled before this branch began, so the
        // scan cannot run off the board while n_empty > 0.
        let cell = (start..N_CELLS as u8)
            .map(Cell::new)
            .find(|&cell| self.grid[cell] == 0)
            .expect("no empty cell despite n_empty > 0");
        let block = cell.block();
        let local = cell.position_in_block();
        for digit in Digit::all() {
            if self.excluded[block][digit].contains(local) {
                continue;
            }
            let mut trial = self;
            if trial.place(cell, digit).is_ok()
                && trial.search(cell.as_index() as u8 + 1, limit, solutions)
            {
                return true;
            }
        }
        false
    }
}
