//! Directed and undirected graphs with two interchangeable storage layouts.
//!
//! [`ListGraph`] keeps an adjacency list per vertex and suits sparse graphs.
//! [`MatrixGraph`] keeps an n×n grid of cells, giving constant-time edge
//! lookup by vertex pair, and hosts two algorithms: a height-bounded
//! spanning tree and a fixed-length cycle search.  Both implement [`Graph`],
//! and each converts into the other without invalidating handles.
//!
//! ```
//! use duograph::{Graph, ListGraph, MatrixGraph};
//!
//! let mut graph: ListGraph<&str, i32, u32> = ListGraph::directed();
//! let a = graph.insert_vertex("a", 0);
//! let b = graph.insert_vertex("b", 1);
//! let ab = graph.insert_edge(a, b)?;
//! graph.insert_edge(b, a)?;
//!
//! let matrix = MatrixGraph::from(graph);
//! assert_eq!(matrix.get_edge(a, b), Some(ab));
//! assert_eq!(matrix.find_cycle_by_length(a, 2)?.len(), 2);
//!
//! let visual = matrix.to_visual_graph();
//! assert_eq!(visual.nodes.len(), 2);
//! # Ok::<(), duograph::GraphError>(())
//! ```

pub mod directedness;
pub mod entity;
pub mod error;
pub mod graph;
pub mod id;
pub mod prelude;
pub mod tracing_support;
pub mod visual;


pub mod list_graph;
pub mod matrix_graph;

mod graph_id;
mod slot_vec;
mod store;

pub use crate::directedness::Directedness;
pub use crate::entity::{Edge, Vertex};
pub use crate::error::{GraphError, Result};
pub use crate::graph::Graph;
pub use crate::id::{EdgeId, VertexId};
pub use crate::list_graph::ListGraph;
pub use crate::matrix_graph::{MatrixGraph, TreeEdge};
pub use crate::visual::VisualGraph;
