use crate::id::VertexId;

/// Errors reported by graph operations.
///
/// Outcomes that are expected in normal use, such as looking up an edge that
/// does not exist or removing a vertex twice, are reported through `bool` or
/// `Option` return values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The vertex is not owned by this graph: it was removed, or it was
    /// issued by a different graph.
    #[error("Vertex not found: {0:?}")]
    VertexNotFound(VertexId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
