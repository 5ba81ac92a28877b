//! Search configuration.

/// How the search picks the column to branch on.
///
/// This is a performance knob only: both modes enumerate exactly the same
/// set of solutions, they merely shape the search tree differently and may
/// report them in a different order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColumnSelection {
    /// Always branch on the first active column. O(1) per choice, but the
    /// search tree can grow a lot larger.
    FirstActive,
    /// Branch on the active column with the fewest live rows, ties going to
    /// the leftmost one. Costs one pass over the active columns per choice.
    #[default]
    MinimumRemaining,
}

impl ColumnSelection {
    /// Maps the classic "greedy column selection" switch to a mode.
    pub const fn from_greedy(greedy: bool) -> Self {
        if greedy {
            Self::MinimumRemaining
        } else {
            Self::FirstActive
        }
    }

    pub const fn is_greedy(self) -> bool {
        matches!(self, Self::MinimumRemaining)
    }
}
