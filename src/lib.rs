//! Implementation of [Knuth's Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X)
//! with dancing links, for enumerating every solution of an
//! [exact cover](https://en.wikipedia.org/wiki/Exact_cover) problem.
//!
//! Given a 0/1 matrix, an exact cover is a set of rows that together have
//! exactly one 1 in every column.
//!
//! ```
//! // [-, -, x, -, x, x, -]
//! // [x, -, -, x, -, -, x]
//! // [-, x, x, -, -, x, -]
//! // [x, -, -, x, -, -, -]
//! // [-, x, -, -, -, -, x]
//! // [-, -, -, x, x, -, x]
//! let matrix = [
//!     "0010110",
//!     "1001001",
//!     "0110010",
//!     "1001000",
//!     "0100001",
//!     "0001101",
//! ]
//! .iter()
//! .map(|row| row.chars().map(|cell| cell == '1').collect())
//! .collect::<Vec<Vec<bool>>>();
//!
//! let mut links = dance::DancingLinks::new(&matrix).unwrap();
//! let report = links.all_solutions();
//!
//! assert_eq!(vec![vec![3, 0, 4]], report.solutions);
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod iter;
pub mod links;
mod node;
pub mod puzzles;
pub mod search;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::ColumnSelection;
pub use error::{Error, MatrixError, Result};
pub use iter::{IntoSolutions, Solutions};
pub use links::DancingLinks;
pub use search::{Report, SearchContext, SearchStats};

/// Builds `matrix` and returns all of its exact covers.
pub fn solve(matrix: &[Vec<bool>], selection: ColumnSelection) -> Result<Vec<Vec<usize>>> {
    let mut links = DancingLinks::new(matrix)?.with_selection(selection);
    Ok(links.all_solutions().solutions)
}
