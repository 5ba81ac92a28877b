//! The toroidal structure and the primitives that splice it.
//!
//! Every node lives in one arena and refers to its neighbours by index, so
//! removing a node from a ring leaves its own links untouched and it can be
//! put back in O(1) later.

use crate::config::ColumnSelection;
use crate::error::MatrixError;
use crate::node::{Node, NodeId};

/// Dancing links representation of a 0/1 matrix.
///
/// Arena layout:
///
/// ```text
/// [ head ] [ column 0 ] [ column 1 ] ... [ data nodes, row by row ... ]
/// ```
///
/// All nodes are allocated by the builder. Searching only relinks them.
#[derive(Clone, Debug)]
pub struct DancingLinks {
    nodes: Vec<Node>,
    columns: Vec<NodeId>,
    rows: usize,
    selection: ColumnSelection,
}

impl DancingLinks {
    /// Builds the structure from a dense boolean matrix, where
    /// `matrix[r][c] == true` means row `r` covers column `c`.
    ///
    /// Row positions are the identifiers reported in solutions. A matrix
    /// whose rows are all empty has zero columns and is trivially solved by
    /// the empty selection.
    pub fn new(matrix: &[Vec<bool>]) -> Result<Self, MatrixError> {
        let first = matrix.first().ok_or(MatrixError::NoRows)?;
        let columns = first.len();

        if let Some((row, found)) = matrix
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: columns,
                found,
            });
        }

        let cells = matrix.iter().flatten().filter(|&&cell| cell).count();
        let mut links = Self::empty(columns, matrix.len(), cells);

        for (key, row) in matrix.iter().enumerate() {
            links.insert_row(
                key,
                row.iter()
                    .enumerate()
                    .filter_map(|(col, &cell)| cell.then_some(col)),
            );
        }

        links.log_built();
        Ok(links)
    }

    /// Builds the structure from rows listing the columns they cover.
    ///
    /// Column indices may come in any order; duplicates within a row are
    /// ignored. Unlike [`DancingLinks::new`] an empty row list is accepted,
    /// since the column count is given explicitly.
    pub fn from_sparse(columns: usize, rows: &[Vec<usize>]) -> Result<Self, MatrixError> {
        for (row, cols) in rows.iter().enumerate() {
            if let Some(&column) = cols.iter().find(|&&col| col >= columns) {
                return Err(MatrixError::ColumnOutOfRange {
                    row,
                    column,
                    columns,
                });
            }
        }

        let cells = rows.iter().map(Vec::len).sum();
        let mut links = Self::empty(columns, rows.len(), cells);

        for (key, row) in rows.iter().enumerate() {
            let mut cols = row.clone();
            cols.sort_unstable();
            cols.dedup();
            links.insert_row(key, cols);
        }

        links.log_built();
        Ok(links)
    }

    /// Uses the given column selection heuristic for subsequent searches.
    #[must_use]
    pub fn with_selection(mut self, selection: ColumnSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn set_selection(&mut self, selection: ColumnSelection) {
        self.selection = selection;
    }

    pub const fn selection(&self) -> ColumnSelection {
        self.selection
    }

    /// Number of columns of the original matrix.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows of the original matrix, including empty ones.
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Live row count of an original column, or `None` if there is no such
    /// column.
    pub fn column_size(&self, column: usize) -> Option<usize> {
        self.columns.get(column).map(|&header| self.at(header).size)
    }

    /// Live row counts of every original column, in column order.
    pub fn column_sizes(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|&header| self.at(header).size)
            .collect()
    }

    /// Original indices of the columns still in the active ring, in ring
    /// order.
    pub fn active_columns(&self) -> Vec<usize> {
        let mut active = vec![];
        let mut current = self.at(NodeId::HEAD).right;
        while current != NodeId::HEAD {
            active.push(self.at(current).key);
            current = self.at(current).right;
        }
        active
    }

    /// Checks the structural invariants on everything reachable from the
    /// head: each link is mirrored by its neighbour and every active
    /// column's size matches the length of its vertical ring.
    pub fn is_consistent(&self) -> bool {
        let mut header = NodeId::HEAD;
        loop {
            if !self.is_linked(header) {
                return false;
            }

            if header != NodeId::HEAD {
                let mut live = 0;
                let mut row = self.at(header).down;
                while row != header {
                    if self.at(row).column != header {
                        return false;
                    }

                    let mut current = row;
                    loop {
                        if !self.is_linked(current) {
                            return false;
                        }
                        current = self.at(current).right;
                        if current == row {
                            break;
                        }
                    }

                    live += 1;
                    row = self.at(row).down;
                }

                if live != self.at(header).size {
                    return false;
                }
            }

            header = self.at(header).right;
            if header == NodeId::HEAD {
                return true;
            }
        }
    }

    fn is_linked(&self, id: NodeId) -> bool {
        let node = self.at(id);
        self.at(node.left).right == id
            && self.at(node.right).left == id
            && self.at(node.up).down == id
            && self.at(node.down).up == id
    }

    pub(crate) fn at(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn at_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Head plus one empty header per column, linked into the active ring.
    fn empty(columns: usize, rows: usize, cells: usize) -> Self {
        let mut links = Self {
            nodes: Vec::with_capacity(1 + columns + cells),
            columns: Vec::with_capacity(columns),
            rows,
            selection: ColumnSelection::default(),
        };

        links.nodes.push(Node::singleton(NodeId::HEAD, 0));

        for col in 0..columns {
            let header = NodeId::new(links.nodes.len());
            links.nodes.push(Node::singleton(header, col));

            let last = links.at(NodeId::HEAD).left;
            links.link_horizontal(last, header);
            links.link_horizontal(header, NodeId::HEAD);
            links.columns.push(header);
        }

        links
    }

    /// Appends one data node per column at the bottom of that column and
    /// closes them into a row ring.
    fn insert_row(&mut self, key: usize, columns: impl IntoIterator<Item = usize>) {
        let mut first = None;
        let mut prev = None;

        for col in columns {
            let header = self.columns[col];
            let node = NodeId::new(self.nodes.len());
            let above = self.at(header).up;

            self.nodes.push(Node {
                left: node,
                right: node,
                up: above,
                down: header,
                column: header,
                key,
                size: 0,
            });

            self.at_mut(above).down = node;
            let column = self.at_mut(header);
            column.up = node;
            column.size += 1;

            match prev {
                Some(prev) => self.link_horizontal(prev, node),
                None => first = Some(node),
            }
            prev = Some(node);
        }

        if let (Some(first), Some(last)) = (first, prev) {
            self.link_horizontal(last, first);
        }
    }

    fn link_horizontal(&mut self, left: NodeId, right: NodeId) {
        self.at_mut(left).right = right;
        self.at_mut(right).left = left;
    }

    fn log_built(&self) {
        log::debug!(
            "built dancing links: {} rows, {} columns, {} nodes",
            self.rows,
            self.columns.len(),
            self.nodes.len()
        );
    }

    /// Removes `column` from the active ring and every row crossing it from
    /// the other columns it touches.
    pub(crate) fn cover(&mut self, column: NodeId) {
        self.detach_column(column);

        let mut row = self.at(column).down;
        while row != column {
            self.detach_row(row);
            row = self.at(row).down;
        }
    }

    /// Exact inverse of [`DancingLinks::cover`]. Must be called in reverse
    /// order of the matching covers.
    pub(crate) fn uncover(&mut self, column: NodeId) {
        let mut row = self.at(column).up;
        while row != column {
            self.attach_row(row);
            row = self.at(row).up;
        }

        self.attach_column(column);
    }

    /// Covers the columns of every other node in `row`, left to right.
    pub(crate) fn cover_row(&mut self, row: NodeId) {
        let mut current = self.at(row).right;
        while current != row {
            self.cover(self.at(current).column);
            current = self.at(current).right;
        }
    }

    /// Undoes [`DancingLinks::cover_row`], right to left.
    pub(crate) fn uncover_row(&mut self, row: NodeId) {
        let mut current = self.at(row).left;
        while current != row {
            self.uncover(self.at(current).column);
            current = self.at(current).left;
        }
    }

    /// Picks the column to branch on, or `None` if no column is left.
    pub(crate) fn select_column(&self) -> Option<NodeId> {
        let first = self.at(NodeId::HEAD).right;
        if first == NodeId::HEAD {
            return None;
        }

        if self.selection == ColumnSelection::FirstActive {
            return Some(first);
        }

        let mut best = first;
        let mut best_size = self.at(first).size;
        let mut current = self.at(first).right;

        while current != NodeId::HEAD && best_size > 0 {
            let size = self.at(current).size;
            if size < best_size {
                best = current;
                best_size = size;
            }
            current = self.at(current).right;
        }

        Some(best)
    }

    fn detach_row(&mut self, node: NodeId) {
        let mut current = self.at(node).right;

        while current != node {
            let Node {
                up,
                down,
                right,
                column,
                ..
            } = *self.at(current);

            self.at_mut(down).up = up;
            self.at_mut(up).down = down;
            self.at_mut(column).size -= 1;

            current = right;
        }
    }

    fn attach_row(&mut self, node: NodeId) {
        let mut current = self.at(node).left;

        while current != node {
            let Node {
                up,
                down,
                left,
                column,
                ..
            } = *self.at(current);

            self.at_mut(column).size += 1;
            self.at_mut(down).up = current;
            self.at_mut(up).down = current;

            current = left;
        }
    }

    fn detach_column(&mut self, column: NodeId) {
        let Node { left, right, .. } = *self.at(column);
        self.at_mut(right).left = left;
        self.at_mut(left).right = right;
    }

    fn attach_column(&mut self, column: NodeId) {
        let Node { left, right, .. } = *self.at(column);
        self.at_mut(right).left = column;
        self.at_mut(left).right = column;
    }
}
