//! Recursive Algorithm X over the dancing links structure.

use std::time::{Duration, Instant};

use crate::links::DancingLinks;

/// Mutable state threaded through one search: the rows chosen so far, the
/// solutions found and the number of search tree nodes visited.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    partial: Vec<usize>,
    solutions: Vec<Vec<usize>>,
    visits: u64,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solutions recorded so far, in discovery order.
    pub fn solutions(&self) -> &[Vec<usize>] {
        &self.solutions
    }

    /// Number of search calls that had to branch on a column.
    pub const fn visits(&self) -> u64 {
        self.visits
    }

    pub fn into_solutions(self) -> Vec<Vec<usize>> {
        self.solutions
    }
}

/// Diagnostics of a completed search. Not part of the result itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchStats {
    pub visits: u64,
    pub solutions: usize,
    pub elapsed: Duration,
}

/// Everything a full run produces.
#[derive(Clone, Debug)]
pub struct Report {
    /// Every exact cover, each a list of row indices in the order they were
    /// chosen.
    pub solutions: Vec<Vec<usize>>,
    pub stats: SearchStats,
}

impl DancingLinks {
    /// Runs Algorithm X from the current state, appending every exact cover
    /// to `ctx`.
    ///
    /// The structure is left exactly as it was found.
    pub fn search(&mut self, ctx: &mut SearchContext) {
        let Some(column) = self.select_column() else {
            log::trace!("solution {:?}", ctx.partial);
            ctx.solutions.push(ctx.partial.clone());
            return;
        };

        ctx.visits += 1;
        self.cover(column);

        let mut row = self.at(column).down;
        while row != column {
            ctx.partial.push(self.at(row).key);
            self.cover_row(row);

            self.search(ctx);

            self.uncover_row(row);
            ctx.partial.pop();
            row = self.at(row).down;
        }

        self.uncover(column);
    }

    /// Enumerates every exact cover of the matrix, in depth-first order.
    ///
    /// An empty list means the matrix has no exact cover. Can be called any
    /// number of times on the same structure with the same outcome.
    pub fn all_solutions(&mut self) -> Report {
        let mut ctx = SearchContext::new();
        log::debug!(
            "searching {} rows x {} columns, {:?}",
            self.row_count(),
            self.column_count(),
            self.selection()
        );

        let start = Instant::now();
        self.search(&mut ctx);
        let elapsed = start.elapsed();

        let stats = SearchStats {
            visits: ctx.visits,
            solutions: ctx.solutions.len(),
            elapsed,
        };
        log::info!(
            "nodes searched: {}, solutions found: {}, time elapsed: {:.6}s",
            stats.visits,
            stats.solutions,
            stats.elapsed.as_secs_f64()
        );

        Report {
            solutions: ctx.into_solutions(),
            stats,
        }
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod tests {
    use super::*;
    use crate::config::ColumnSelection;

    fn matrix(rows: &[&[u8]]) -> Vec<Vec<bool>> {
        rows.iter()
            .map(|row| row.iter().map(|&cell| cell == 1).collect())
            .collect()
    }

    #[test]
    fn test_basic_solve() {
        // [x, x, -, -]
        // [x, -, x, -]
        // [-, x, -, x]
        // [-, -, x, x]
        // [x, x, x, -]
        // [-, x, x, x]
        let mut links = DancingLinks::new(&matrix(&[
            &[1, 1, 0, 0],
            &[1, 0, 1, 0],
            &[0, 1, 0, 1],
            &[0, 0, 1, 1],
            &[1, 1, 1, 0],
            &[0, 1, 1, 1],
        ])).unwrap();

        let report = links.all_solutions();

        assert_eq!(vec![vec![0, 3], vec![1, 2]], report.solutions);
        assert_eq!(2, report.stats.solutions);
    }

    #[test]
    fn test_search_with_explicit_context() {
        let mut links = DancingLinks::new(&matrix(&[
            &[1, 0],
            &[0, 1],
        ])).unwrap();

        let mut ctx = SearchContext::new();
        links.search(&mut ctx);

        assert_eq!(&[vec![0, 1]], ctx.solutions());
        assert_eq!(2, ctx.visits());
    }

    #[test]
    fn test_visits_depend_on_selection() {
        // first active branches on column 0 (three rows), greedy on column 1
        let rows = matrix(&[
            &[1, 0, 0],
            &[1, 0, 0],
            &[1, 1, 1],
        ]);

        let mut greedy = DancingLinks::new(&rows).unwrap();
        let mut first = DancingLinks::new(&rows).unwrap()
            .with_selection(ColumnSelection::FirstActive);

        let greedy = greedy.all_solutions();
        let first = first.all_solutions();

        assert_eq!(vec![vec![2]], greedy.solutions);
        assert_eq!(greedy.solutions, first.solutions);
        assert_eq!(1, greedy.stats.visits);
        assert_eq!(3, first.stats.visits);
    }

    #[test]
    fn test_dead_column_fails_branch() {
        let mut links = DancingLinks::new(&matrix(&[
            &[1, 0],
            &[1, 0],
        ])).unwrap();

        let report = links.all_solutions();

        assert!(report.solutions.is_empty());
        assert_eq!(1, report.stats.visits);
    }
}
