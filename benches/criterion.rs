use criterion::{criterion_group, criterion_main, Criterion};
use unidoku::Sudoku;

// solvable by hidden singles alone
const PROPAGATION_ONLY: &str = "\
000809000
008617400
069000720
740000065
020000090
890000072
087000910
005786200
000401000";

// 17 clues with diagonal symmetry, needs deep backtracking
const SEVENTEEN_CLUES: &str = "\
000000001
000000023
004005000
000100000
000030600
007000580
000067000
010004000
520000000";

// engineered against row-major brute force
const ANTI_BRUTE_FORCE: &str = "\
000000000
000003085
001020000
000507000
004000100
090000000
500000073
002010000
000040009";

fn propagation_only_solve_unique(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_block(PROPAGATION_ONLY).unwrap();
    c.bench_function("propagation_only_solve_unique", |b| {
        b.iter(|| sudoku.solve_unique())
    });
}

fn seventeen_clues_solve_unique(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_block(SEVENTEEN_CLUES).unwrap();
    c.bench_function("seventeen_clues_solve_unique", |b| {
        b.iter(|| sudoku.solve_unique())
    });
}

fn anti_brute_force_solve_one(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_block(ANTI_BRUTE_FORCE).unwrap();
    c.bench_function("anti_brute_force_solve_one", |b| {
        b.iter(|| sudoku.solve_one())
    });
}

criterion_group!(
    benches,
    propagation_only_solve_unique,
    seventeen_clues_solve_unique,
    anti_brute_force_solve_one
);
criterion_main!(benches);
