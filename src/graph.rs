//! `Graph` is the contract shared by [`ListGraph`](crate::ListGraph) and
//! [`MatrixGraph`](crate::MatrixGraph).  Code written against it works with
//! either representation; the two differ only in cost profile and in the
//! order their iterators yield items.
//!
//! Vertices and edges are addressed by [`VertexId`] and [`EdgeId`] handles.
//! Handles compare by identity: two vertices with the same name and data are
//! still different vertices.  A handle stays valid until its entity is
//! removed from the graph.
//!
//! # Iteration
//!
//! [`Graph::vertex_ids`], [`Graph::edge_ids`] and [`Graph::edges_from`]
//! return lazy, one-shot iterators that borrow the graph.  The graph cannot
//! be mutated while one of them is alive:
//!
//! ```compile_fail
//! use duograph::{Directedness, Graph, ListGraph};
//!
//! let mut graph: ListGraph<&str, (), u32> = ListGraph::new(Directedness::Directed);
//! graph.insert_vertex("a", ());
//! for vertex in graph.vertex_ids() {
//!     graph.remove_vertex(vertex);
//! }
//! ```
//!
//! Collect the handles first when a loop needs to mutate:
//!
//! ```
//! use duograph::{Directedness, Graph, ListGraph};
//!
//! let mut graph: ListGraph<&str, (), u32> = ListGraph::new(Directedness::Directed);
//! graph.insert_vertex("a", ());
//! graph.insert_vertex("b", ());
//! for vertex in graph.vertex_ids().collect::<Vec<_>>() {
//!     graph.remove_vertex(vertex);
//! }
//! assert_eq!(graph.num_vertices(), 0);
//! ```
use std::fmt::Display;

use crate::{
    directedness::Directedness,
    entity::{Edge, Vertex},
    error::Result,
    id::{EdgeId, VertexId},
    visual::VisualGraph,
};

/// A directed or undirected graph that owns its vertices and edges.
///
/// Vertex names and data are opaque to the graph.  Edge data has the same
/// type as vertex data; edge weights must be totally ordered but are not
/// interpreted by any operation here.
pub trait Graph {
    type Name;
    type VertexData;
    type Weight: Ord;

    /// Creates a new, empty graph.
    fn new(directedness: Directedness) -> Self
    where
        Self: Sized;

    /// The directedness chosen when the graph was created.
    fn directedness(&self) -> Directedness;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    // Mutation

    /// Adds a vertex with a fresh identity and no edges.
    fn insert_vertex(&mut self, name: Self::Name, data: Self::VertexData) -> VertexId;

    /// Removes a vertex and every edge touching it.  Returns false if the
    /// vertex is not a member of this graph.
    fn remove_vertex(&mut self, vertex: VertexId) -> bool;

    /// Adds an edge from `from` to `to` and returns it.  Any edge already
    /// linking the same pair is replaced, so afterwards
    /// [`get_edge(from, to)`](Self::get_edge) returns the new edge.  In an
    /// undirected graph the edge is reachable from both endpoints.
    ///
    /// Fails with [`VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// either endpoint is not a member.
    fn insert_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId>;

    /// Removes the link from `from` to `to`, and its mirror in an undirected
    /// graph.  Returns false only if either endpoint is not a member.
    fn delete_edge(&mut self, from: VertexId, to: VertexId) -> bool;

    // Queries

    /// Gets the edge linking `from` to `to`, if both are members and such an
    /// edge exists.  In an undirected graph the argument order is irrelevant.
    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId>;

    /// Borrows a vertex, or `None` if `id` is not a live member.
    fn vertex(&self, id: VertexId) -> Option<&Vertex<Self::Name, Self::VertexData>>;

    /// Borrows a vertex for in-place mutation.  Its identity is unaffected.
    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<Self::Name, Self::VertexData>>;

    /// Borrows an edge, or `None` if `id` is not a live edge of this graph.
    fn edge(&self, id: EdgeId) -> Option<&Edge<Self::VertexData, Self::Weight>>;

    /// Borrows an edge for in-place mutation of its weight or data.
    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<Self::VertexData, Self::Weight>>;

    /// Iterates over all vertices.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Iterates over all edges, yielding each edge once even when an
    /// undirected edge is stored under both endpoints.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_;

    /// Iterates over the edges leaving `vertex`.  In an undirected graph
    /// these are all edges touching it.  Empty if `vertex` is not a member.
    fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_;

    /// Checks whether `vertex` is a member of this graph.
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex(vertex).is_some()
    }

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edge_ids().count()
    }

    /// Gets the vertices reachable from `vertex` by one edge, in
    /// [`edges_from`](Self::edges_from) order.  A vertex linked by several
    /// edges is yielded once per edge.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges_from(vertex)
            .filter_map(move |eid| self.edge(eid).and_then(|edge| edge.other_end(vertex)))
    }

    /// Finds the first vertex, in iteration order, whose name equals `name`.
    fn find_vertex_by_name(&self, name: &Self::Name) -> Option<VertexId>
    where
        Self::Name: PartialEq,
    {
        self.vertex_ids()
            .find(|&vid| self.vertex(vid).is_some_and(|vertex| vertex.name() == name))
    }

    /// Projects the graph into a node/edge list for an external renderer.
    fn to_visual_graph(&self) -> VisualGraph
    where
        Self: Sized,
        Self::Name: Display,
        Self::VertexData: Display,
        Self::Weight: Display,
    {
        VisualGraph::project(self)
    }

    /// Counts the vertices whose shortest hop distance from `vertex`, along
    /// [`edges_from`](Self::edges_from), is exactly `distance`.  A distance of
    /// zero counts `vertex` itself.
    #[cfg(feature = "pathfinding")]
    fn count_vertices_by_distance(&self, vertex: VertexId, distance: usize) -> Result<usize> {
        use pathfinding::prelude::dijkstra_all;

        if !self.contains_vertex(vertex) {
            return Err(crate::GraphError::VertexNotFound(vertex));
        }
        if distance == 0 {
            return Ok(1);
        }
        let reached = dijkstra_all(&vertex, |&vid| {
            self.successors(vid).map(|next| (next, 1usize)).collect::<Vec<_>>()
        });
        Ok(reached
            .values()
            .filter(|&&(_, hops)| hops == distance)
            .count())
    }
}
