//! Search cost under both column selection modes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dance::puzzles::pentomino::{parse_mask, pentominoes, Tiling};
use dance::puzzles::sudoku::{cover_for, parse_board};
use dance::{ColumnSelection, DancingLinks};

const PUZZLE: &str = "
5 3 0 0 7 0 0 0 0
6 0 0 1 9 5 0 0 0
0 9 8 0 0 0 0 6 0
8 0 0 0 6 0 0 0 3
4 0 0 8 0 3 0 0 1
7 0 0 0 2 0 0 0 6
0 6 0 0 0 0 2 8 0
0 0 0 4 1 9 0 0 5
0 0 0 0 8 0 0 7 9
";

fn bench_sudoku(c: &mut Criterion) {
    let Ok(matrix) = parse_board(PUZZLE).and_then(|board| cover_for(&board)) else {
        return;
    };

    let mut group = c.benchmark_group("sudoku");
    for selection in [ColumnSelection::MinimumRemaining, ColumnSelection::FirstActive] {
        let Ok(links) = DancingLinks::new(&matrix) else {
            break;
        };
        let mut links = links.with_selection(selection);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{selection:?}")),
            &selection,
            |b, _| b.iter(|| black_box(links.all_solutions().stats.solutions)),
        );
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let Ok(tiling) = Tiling::new(parse_mask(&["##########"; 6]), pentominoes()) else {
        return;
    };

    c.bench_function("build_pentomino_6x10", |b| {
        b.iter(|| black_box(DancingLinks::new(tiling.matrix()).map(|links| links.row_count())));
    });
}

fn bench_first_tiling(c: &mut Criterion) {
    let Ok(tiling) = Tiling::new(parse_mask(&["##########"; 6]), pentominoes()) else {
        return;
    };
    let Ok(mut links) = DancingLinks::new(tiling.matrix()) else {
        return;
    };

    c.bench_function("first_pentomino_6x10", |b| {
        b.iter(|| black_box(links.solutions().next()));
    });
}

criterion_group!(benches, bench_sudoku, bench_build, bench_first_tiling);
criterion_main!(benches);
