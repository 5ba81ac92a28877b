//! Lazy search driven by an explicit frame stack instead of recursion.

use std::iter::FusedIterator;

use crate::links::DancingLinks;
use crate::node::NodeId;

/// One level of the search: the column being branched on and the row of it
/// currently selected. `row == column` means no row has been tried yet.
struct Frame {
    column: NodeId,
    row: NodeId,
}

/// Search progress kept between solutions, apart from the structure it
/// runs on.
struct SearchState {
    frames: Vec<Frame>,
    partial: Vec<usize>,
    visits: u64,
    descending: bool,
}

impl SearchState {
    fn new(depth: usize) -> Self {
        Self {
            frames: Vec::with_capacity(depth),
            partial: Vec::with_capacity(depth),
            visits: 0,
            descending: true,
        }
    }

    fn is_completed(&self) -> bool {
        !self.descending && self.frames.is_empty()
    }

    /// Runs the search on `links` up to its next solution.
    fn next_solution(&mut self, links: &mut DancingLinks) -> Option<Vec<usize>> {
        loop {
            if self.descending {
                self.descending = false;

                let Some(column) = links.select_column() else {
                    return Some(self.partial.clone());
                };

                self.visits += 1;
                links.cover(column);
                self.frames.push(Frame {
                    column,
                    row: column,
                });
            }

            if !self.step_forward(links) {
                return None;
            }
        }
    }

    /// Moves the topmost frame to its next row, popping frames whose rows
    /// are used up. Returns `false` once the stack is empty.
    fn step_forward(&mut self, links: &mut DancingLinks) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };

        if frame.row != frame.column {
            links.uncover_row(frame.row);
            self.partial.pop();
        }

        frame.row = links.at(frame.row).down;

        if frame.row == frame.column {
            let column = frame.column;
            links.uncover(column);
            self.frames.pop();
        } else {
            let row = frame.row;
            self.partial.push(links.at(row).key);
            links.cover_row(row);
            self.descending = true;
        }

        true
    }

    /// Undoes every pending cover, innermost first.
    fn unwind(&mut self, links: &mut DancingLinks) {
        while let Some(frame) = self.frames.pop() {
            if frame.row != frame.column {
                links.uncover_row(frame.row);
                self.partial.pop();
            }
            links.uncover(frame.column);
        }
    }
}

/// Iterator over the exact covers of a [`DancingLinks`] structure.
///
/// Produces the same solutions in the same order as
/// [`DancingLinks::all_solutions`], but one at a time and without recursing,
/// so its depth is only bounded by memory. Dropping it before it is
/// exhausted undoes every pending cover, leaving the structure as it was.
pub struct Solutions<'a> {
    links: &'a mut DancingLinks,
    state: SearchState,
}

impl Solutions<'_> {
    /// Search tree nodes visited so far.
    pub const fn visits(&self) -> u64 {
        self.state.visits
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }
}

impl Iterator for Solutions<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.next_solution(self.links)
    }
}

impl FusedIterator for Solutions<'_> {}

impl Drop for Solutions<'_> {
    fn drop(&mut self) {
        self.state.unwind(self.links);
    }
}

/// Owning counterpart of [`Solutions`], for when the structure has to
/// outlive the scope that built it. [`IntoSolutions::into_inner`] gives the
/// structure back, restored.
pub struct IntoSolutions {
    links: DancingLinks,
    state: SearchState,
}

impl IntoSolutions {
    pub const fn visits(&self) -> u64 {
        self.state.visits
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    pub fn into_inner(mut self) -> DancingLinks {
        self.state.unwind(&mut self.links);
        self.links
    }
}

impl Iterator for IntoSolutions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.next_solution(&mut self.links)
    }
}

impl FusedIterator for IntoSolutions {}

impl DancingLinks {
    /// Streams the exact covers one by one.
    ///
    /// ```
    /// use dance::DancingLinks;
    ///
    /// let mut links = DancingLinks::new(&[
    ///     vec![true, false],
    ///     vec![false, true],
    ///     vec![true, true],
    /// ]).unwrap();
    ///
    /// let first = links.solutions().next();
    /// assert_eq!(Some(vec![0, 1]), first);
    /// assert_eq!(2, links.solutions().count());
    /// ```
    pub fn solutions(&mut self) -> Solutions<'_> {
        let state = SearchState::new(self.column_count());
        Solutions { links: self, state }
    }

    /// Like [`DancingLinks::solutions`], but takes ownership of the
    /// structure.
    pub fn into_solutions(self) -> IntoSolutions {
        let state = SearchState::new(self.column_count());
        IntoSolutions { links: self, state }
    }
}
