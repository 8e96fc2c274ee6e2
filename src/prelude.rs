pub use crate::directedness::Directedness;
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::id::{EdgeId, VertexId};
pub use crate::list_graph::ListGraph;
pub use crate::matrix_graph::{MatrixGraph, TreeEdge};
pub use crate::visual::{ArrowDirection, VisualGraph};
