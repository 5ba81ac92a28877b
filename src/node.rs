/// Index of a [`Node`] inside the [`DancingLinks`](crate::DancingLinks) arena.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The master head always lives in the first arena slot.
    pub(crate) const HEAD: Self = Self(0);

    pub(crate) const fn new(value: usize) -> Self {
        Self(value)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// One cell of the toroidal structure: the master head, a column header or
/// a data node.
///
/// `key` is only meaningful on data nodes (the original row index) and
/// `size` only on column headers (the number of live rows in the column).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Node {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) up: NodeId,
    pub(crate) down: NodeId,
    pub(crate) column: NodeId,
    pub(crate) key: usize,
    pub(crate) size: usize,
}

impl Node {
    /// A node linked to itself on both axes.
    pub(crate) const fn singleton(id: NodeId, key: usize) -> Self {
        Self {
            left: id,
            right: id,
            up: id,
            down: id,
            column: id,
            key,
            size: 0,
        }
    }
}
