use std::collections::VecDeque;

use bitvec::prelude::*;
use tracing::{debug, info_span};

use super::MatrixGraph;
use crate::{
    error::{GraphError, Result},
    id::{EdgeId, VertexId},
};

/// A partial walk from the base vertex.
struct Walk {
    at: usize,
    edges: Vec<EdgeId>,
    visited: BitVec,
}

impl<N, D, W> MatrixGraph<N, D, W>
where
    W: Ord,
{
    /// Finds a closed walk of exactly `length` edges that starts and ends at
    /// `vertex`.
    ///
    /// Walks are expanded breadth first along each vertex's row.  A walk may
    /// step onto a vertex it has not visited yet, or back onto `vertex` along
    /// an edge it has not used yet, so it can pass through the base vertex
    /// more than once but never through any other vertex twice.  Returns the
    /// edges of the first matching walk in that order, or an empty list if
    /// there is none.
    pub fn find_cycle_by_length(&self, vertex: VertexId, length: usize) -> Result<Vec<EdgeId>> {
        let _span = info_span!("find_cycle_by_length", ?vertex, length).entered();
        let start = self.require_position(vertex)?;
        if length <= 1 {
            return Err(GraphError::InvalidArgument(format!(
                "cycle length must be at least 2, got {length}"
            )));
        }

        let mut visited = bitvec![0; self.order.len()];
        visited.set(start, true);
        let mut frontier = VecDeque::from([Walk {
            at: start,
            edges: Vec::new(),
            visited,
        }]);
        let mut expanded = 0usize;

        while let Some(walk) = frontier.pop_front() {
            if walk.edges.len() == length {
                if walk.at == start {
                    debug!(expanded, "found cycle");
                    return Ok(walk.edges);
                }
                continue;
            }
            expanded += 1;
            for (next, eid) in self.row_entries(walk.at) {
                let returning = next == start && !walk.edges.contains(&eid);
                if walk.visited[next] && !returning {
                    continue;
                }
                let mut visited = walk.visited.clone();
                visited.set(next, true);
                let mut edges = walk.edges.clone();
                edges.push(eid);
                frontier.push_back(Walk {
                    at: next,
                    edges,
                    visited,
                });
            }
        }
        debug!(expanded, "no cycle of requested length");
        Ok(Vec::new())
    }
}
