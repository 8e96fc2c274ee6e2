use crate::id::EdgeId;

/// One cell of the adjacency matrix.  Absence is its own variant, so an empty
/// cell can never be mistaken for an edge whose weight and data are unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Edge(EdgeId),
}

impl Cell {
    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Cell::Empty => None,
            Cell::Edge(eid) => Some(eid),
        }
    }

    /// Empties the cell, returning the edge it held.
    pub fn take(&mut self) -> Option<EdgeId> {
        std::mem::take(self).edge()
    }
}
