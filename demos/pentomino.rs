#![allow(clippy::print_stdout)]

use dance::puzzles::pentomino::hollow_chessboard_subproblems;
use dance::DancingLinks;

fn main() -> dance::Result<()> {
    let (tiling, subproblems) = hollow_chessboard_subproblems()?;

    for (index, matrix) in subproblems.iter().enumerate() {
        println!("Solving subproblem {}...", index + 1);

        let mut links = DancingLinks::new(matrix)?;
        let report = links.all_solutions();

        println!(
            "{} solutions, {} nodes searched in {:?}",
            report.stats.solutions, report.stats.visits, report.stats.elapsed
        );

        if let Some(solution) = report.solutions.first() {
            println!("{}", tiling.render(solution));
        }
    }

    Ok(())
}
