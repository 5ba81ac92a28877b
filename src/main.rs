//! Command line driver: reads a matrix file, writes every exact cover of it.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::Parser;
use dance::io::{load_matrix, save_solutions};
use dance::{ColumnSelection, DancingLinks};

#[derive(Parser)]
#[command(name = "dance")]
#[command(author, version, about = "Find all exact covers of a 0/1 matrix")]
struct Cli {
    /// Matrix file, one row per line, cells separated by spaces
    #[arg(value_name = "PROBLEM")]
    problem: PathBuf,

    /// Where to write the solutions, one per line
    #[arg(value_name = "SOLUTION")]
    solution: PathBuf,

    /// Branch on the first remaining column instead of the smallest one
    #[arg(short, long)]
    first_active: bool,

    /// Do not print search statistics
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> dance::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let matrix = load_matrix(&cli.problem)?;
    let mut links =
        DancingLinks::new(&matrix)?.with_selection(ColumnSelection::from_greedy(!cli.first_active));

    let report = links.all_solutions();
    save_solutions(&cli.solution, &report.solutions)?;

    if !cli.quiet {
        println!("Nodes searched: {}", report.stats.visits);
        println!("Solutions found: {}", report.stats.solutions);
        println!("Time elapsed: {:.6}", report.stats.elapsed.as_secs_f64());
    }

    Ok(())
}
