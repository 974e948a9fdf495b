use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Instant;

use unidoku::{Solutions, Sudoku};

// Reads blank-line-separated 9x9 puzzles from a file argument or stdin and
// prints a solved grid (or a failure note) for each. Timings and uniqueness
// warnings go to the log, enable them with RUST_LOG=info.
fn main() -> ExitCode {
    env_logger::init();

    let input = match read_input() {
        Ok(input) => input,
        Err(err) => {
            log::error!("failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let blocks = puzzle_blocks(&input);
    if blocks.is_empty() {
        log::error!("no puzzles in input");
        return ExitCode::FAILURE;
    }

    let mut all_solved = true;
    for (nr, block) in blocks.iter().enumerate() {
        if nr > 0 {
            println!();
        }
        all_solved &= solve_and_print(nr, block);
    }
    if all_solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

// Groups the input lines into blank-line-separated blocks.
fn puzzle_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn solve_and_print(nr: usize, block: &str) -> bool {
    let sudoku = match Sudoku::from_str_block(block) {
        Ok(sudoku) => sudoku,
        Err(err) => {
            log::error!("puzzle {}: {}", nr + 1, err);
            println!("invalid input");
            return false;
        }
    };
    let started = Instant::now();
    let solutions = match sudoku.solve() {
        Ok(solutions) => solutions,
        Err(err) => {
            log::error!("puzzle {}: {}", nr + 1, err);
            println!("invalid puzzle");
            return false;
        }
    };
    log::info!("puzzle {}: searched for {:?}", nr + 1, started.elapsed());
    match solutions {
        Solutions::None => {
            println!("unsolvable");
            false
        }
        Solutions::Unique(solution) => {
            println!("{}", solution);
            true
        }
        Solutions::Multiple(solution) => {
            log::warn!("puzzle {}: solution is not unique", nr + 1);
            println!("{}", solution);
            true
        }
    }
}
