use crate::{
    entity::{Edge, Vertex},
    error::{GraphError, Result},
    graph_id::GraphId,
    id::{EdgeId, VertexId},
    slot_vec::SlotVec,
};

/// Owns the vertex and edge records of one graph.  The adjacency structure of
/// each representation refers to these records by handle only.
#[derive(Clone, Debug)]
pub(crate) struct Store<N, D, W> {
    id: GraphId,
    vertices: SlotVec<Vertex<N, D>>,
    edges: SlotVec<Edge<D, W>>,
}

impl<N, D, W> Store<N, D, W> {
    pub fn new() -> Self {
        Self {
            id: GraphId::new(),
            vertices: SlotVec::new(),
            edges: SlotVec::new(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self, name: N, data: D) -> VertexId {
        let key = self.vertices.insert(Vertex::new(name, data));
        VertexId::new(key, self.id)
    }

    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<N, D>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.vertices.remove(id.key())
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<N, D>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.vertices.get(id.key())
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<N, D>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.vertices.get_mut(id.key())
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.graph_id() == self.id && self.vertices.contains(id.key())
    }

    /// Checks that `id` refers to a live vertex of this store.
    pub fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }

    /// Creates a new edge record.  The caller is responsible for checking
    /// that both endpoints are members and for linking the edge into its
    /// adjacency structure.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        debug_assert!(self.contains_vertex(from) && self.contains_vertex(to));
        let key = self.edges.insert(Edge::new(from, to));
        EdgeId::new(key, self.id)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge<D, W>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.edges.remove(id.key())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<D, W>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.edges.get(id.key())
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<D, W>> {
        if id.graph_id() != self.id {
            return None;
        }
        self.edges.get_mut(id.key())
    }

    /// Looks up a live edge that the adjacency structure refers to.  A miss
    /// means the adjacency structure and the store have diverged.
    pub fn linked_edge(&self, id: EdgeId) -> &Edge<D, W> {
        self.edge(id)
            .unwrap_or_else(|| panic!("adjacency refers to dropped edge {:?}", id))
    }
}
