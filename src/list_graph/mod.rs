use std::collections::{BTreeMap, HashSet};

use tracing::{info_span, trace};

use crate::{
    directedness::Directedness,
    entity::{Edge, Vertex},
    error::Result,
    graph::Graph,
    id::{EdgeId, VertexId},
    matrix_graph::MatrixGraph,
    store::Store,
};

/// A graph that stores, for every vertex, the sequence of edges leaving it.
///
/// Suited to sparse graphs: iterating the edges of one vertex costs
/// O(degree).  Removing a vertex scans every adjacency sequence.
///
/// Vertices iterate in insertion order, and the edges of a vertex in the
/// order they were inserted.  In an undirected graph each edge is listed
/// under both of its endpoints.
///
/// # Type Parameters
/// * `N` - The type of vertex names
/// * `D` - The type of vertex and edge data
/// * `W` - The type of edge weights
#[derive(Clone, Debug)]
pub struct ListGraph<N, D, W> {
    store: Store<N, D, W>,
    // Keys order by handle issue order, which is insertion order.
    adjacency: BTreeMap<VertexId, Vec<EdgeId>>,
    directedness: Directedness,
}

impl<N, D, W> ListGraph<N, D, W>
where
    W: Ord,
{
    /// Creates a new, empty directed graph.
    pub fn directed() -> Self {
        <Self as Graph>::new(Directedness::Directed)
    }

    /// Creates a new, empty undirected graph.
    pub fn undirected() -> Self {
        <Self as Graph>::new(Directedness::Undirected)
    }

    /// Gets the edges listed under `from` whose far end is `to`.
    fn linked_between(&self, from: VertexId, to: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges_from(from)
            .filter(move |&eid| self.store.linked_edge(eid).other_end(from) == Some(to))
    }

    /// Removes every edge linking `from` to `to`, returning how many there
    /// were.
    fn unlink_between(&mut self, from: VertexId, to: VertexId) -> usize {
        let doomed: Vec<EdgeId> = self.linked_between(from, to).collect();
        for &eid in &doomed {
            for endpoint in [from, to] {
                if let Some(edges) = self.adjacency.get_mut(&endpoint) {
                    edges.retain(|&e| e != eid);
                }
            }
            self.store.remove_edge(eid);
        }
        doomed.len()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Store<N, D, W>,
        BTreeMap<VertexId, Vec<EdgeId>>,
        Directedness,
    ) {
        (self.store, self.adjacency, self.directedness)
    }
}

impl<N, D, W> Graph for ListGraph<N, D, W>
where
    W: Ord,
{
    type Name = N;
    type VertexData = D;
    type Weight = W;

    fn new(directedness: Directedness) -> Self {
        Self {
            store: Store::new(),
            adjacency: BTreeMap::new(),
            directedness,
        }
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn insert_vertex(&mut self, name: N, data: D) -> VertexId {
        let vid = self.store.add_vertex(name, data);
        self.adjacency.insert(vid, Vec::new());
        trace!(vertex = ?vid, "inserted vertex");
        vid
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        if !self.store.contains_vertex(vertex) {
            return false;
        }
        let mut doomed: HashSet<EdgeId> = self
            .adjacency
            .remove(&vertex)
            .unwrap_or_default()
            .into_iter()
            .collect();
        let store = &self.store;
        for edges in self.adjacency.values_mut() {
            edges.retain(|&eid| {
                let keep = !store.linked_edge(eid).touches(vertex);
                if !keep {
                    doomed.insert(eid);
                }
                keep
            });
        }
        for &eid in &doomed {
            self.store.remove_edge(eid);
        }
        self.store.remove_vertex(vertex);
        trace!(vertex = ?vertex, edges = doomed.len(), "removed vertex");
        true
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        self.store.check_vertex(from)?;
        self.store.check_vertex(to)?;
        let replaced = self.unlink_between(from, to);
        let eid = self.store.add_edge(from, to);
        self.adjacency.entry(from).or_default().push(eid);
        if !self.is_directed() && from != to {
            self.adjacency.entry(to).or_default().push(eid);
        }
        trace!(edge = ?eid, ?from, ?to, replaced, "inserted edge");
        Ok(eid)
    }

    fn delete_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if !self.store.contains_vertex(from) || !self.store.contains_vertex(to) {
            return false;
        }
        let removed = self.unlink_between(from, to);
        trace!(?from, ?to, removed, "deleted edge");
        true
    }

    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if !self.store.contains_vertex(to) {
            return None;
        }
        self.linked_between(from, to).next()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<N, D>> {
        self.store.vertex(id)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<N, D>> {
        self.store.vertex_mut(id)
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge<D, W>> {
        self.store.edge(id)
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<D, W>> {
        self.store.edge_mut(id)
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Gets an iterator over all edges in insertion order of their first
    /// listing vertex, then insertion order within that vertex.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        // An undirected edge is listed twice; keep the first listing.
        let mut seen = HashSet::new();
        self.adjacency
            .values()
            .flatten()
            .copied()
            .filter(move |&eid| seen.insert(eid))
    }

    fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency.get(&vertex).into_iter().flatten().copied()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.store.contains_vertex(vertex)
    }

    fn num_vertices(&self) -> usize {
        self.store.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.store.num_edges()
    }
}

impl<N, D, W> From<MatrixGraph<N, D, W>> for ListGraph<N, D, W>
where
    W: Ord,
{
    /// Converts a matrix graph by walking its vertices, then each vertex's
    /// row.  The vertex and edge records move over unchanged, so every handle
    /// issued by the matrix graph stays valid.
    fn from(matrix: MatrixGraph<N, D, W>) -> Self {
        let _span = info_span!("list_graph_from_matrix", vertices = matrix.num_vertices()).entered();
        let adjacency = matrix
            .vertex_ids()
            .map(|vid| (vid, matrix.edges_from(vid).collect()))
            .collect();
        let (store, directedness) = matrix.into_store();
        Self {
            store,
            adjacency,
            directedness,
        }
    }
}
