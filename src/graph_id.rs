use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter.  We assume no two graphs will have the
/// same identifier; wrapping would take longer than any realistic process
/// lifetime, and the only impact would be that a handle from one graph could
/// pass the ownership check of another.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph's entity store.  Every [`VertexId`] and
/// [`EdgeId`] carries the `GraphId` of the store that issued it, so handles
/// from an unrelated graph are rejected instead of silently aliasing.
///
/// [`VertexId`]: crate::id::VertexId
/// [`EdgeId`]: crate::id::EdgeId
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}
