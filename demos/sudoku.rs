#![allow(clippy::print_stdout)]

use dance::puzzles::sudoku::{board_for, cover_for};
use dance::DancingLinks;

const PUZZLE: [[usize; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

fn print_board(board: &[Vec<usize>]) {
    println!("-------------------------");
    for rows in board.chunks(3) {
        for row in rows {
            for col in row.chunks(3) {
                print!("| ");
                for num in col {
                    print!("{} ", num);
                }
            }
            println!("|");
        }
        println!("-------------------------");
    }
    println!();
}

fn main() -> dance::Result<()> {
    let board = PUZZLE.iter().map(|row| row.to_vec()).collect::<Vec<_>>();
    let matrix = cover_for(&board)?;

    let mut links = DancingLinks::new(&matrix)?;
    let report = links.all_solutions();

    if report.solutions.len() > 1 {
        println!("Warning: solution is not unique!");
    }

    match report.solutions.first() {
        Some(solution) => print_board(&board_for(solution, 9)),
        None => println!("No solutions found!"),
    }

    println!(
        "{} solution(s), {} nodes searched in {:?}",
        report.stats.solutions, report.stats.visits, report.stats.elapsed
    );

    Ok(())
}
