//! Vertex and edge records.  Both are plain data; their identity lives in the
//! [`VertexId`] and [`EdgeId`] handles issued by the owning graph, so
//! mutating a record in place never changes which entity it is.
use std::fmt::{self, Display};

use crate::id::VertexId;

/// A vertex with a name and a data payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex<N, D> {
    name: N,
    data: D,
}

impl<N, D> Vertex<N, D> {
    pub fn new(name: N, data: D) -> Self {
        Self { name, data }
    }

    pub fn name(&self) -> &N {
        &self.name
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn set_name(&mut self, name: N) {
        self.name = name;
    }

    pub fn set_data(&mut self, data: D) {
        self.data = data;
    }
}

impl<N: Display, D: Display> Display for Vertex<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}\ndata: {}", self.name, self.data)
    }
}

/// A link from one vertex to another.  In an undirected graph the same record
/// is reachable from both endpoints; `from` and `to` then only record the
/// order the endpoints were given in.
///
/// The weight is carried for consumers of the graph; none of the algorithms
/// in this crate look at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<D, W> {
    from: VertexId,
    to: VertexId,
    weight: Option<W>,
    data: Option<D>,
}

impl<D, W> Edge<D, W> {
    pub(crate) fn new(from: VertexId, to: VertexId) -> Self {
        Self {
            from,
            to,
            weight: None,
            data: None,
        }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Given one endpoint, returns the other.  For a self-loop both ends are
    /// the same vertex.  Returns `None` if `vertex` is not an endpoint.
    pub fn other_end(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Checks whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    pub fn weight(&self) -> Option<&W> {
        self.weight.as_ref()
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Replaces the weight, returning the previous one.
    pub fn set_weight(&mut self, weight: Option<W>) -> Option<W> {
        std::mem::replace(&mut self.weight, weight)
    }

    /// Replaces the data, returning the previous one.
    pub fn set_data(&mut self, data: Option<D>) -> Option<D> {
        std::mem::replace(&mut self.data, data)
    }
}

impl<D: Display, W: Display> Display for Edge<D, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(data) = &self.data {
            writeln!(f, "data: {}", data)?;
        }
        if let Some(weight) = &self.weight {
            write!(f, "weight: {}", weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph_id::GraphId, slot_vec::SlotVec};

    fn two_vertex_ids() -> (VertexId, VertexId) {
        let graph_id = GraphId::new();
        let mut slots = SlotVec::new();
        (
            VertexId::new(slots.insert(()), graph_id),
            VertexId::new(slots.insert(()), graph_id),
        )
    }

    #[test]
    fn test_vertex_display() {
        let vertex = Vertex::new("a", 7);
        assert_eq!(vertex.to_string(), "name: a\ndata: 7");
    }

    #[test]
    fn test_edge_display() {
        let (a, b) = two_vertex_ids();
        let mut edge: Edge<String, u32> = Edge::new(a, b);
        assert_eq!(edge.to_string(), "");
        edge.set_weight(Some(3));
        assert_eq!(edge.to_string(), "weight: 3");
        edge.set_data(Some("road".to_string()));
        assert_eq!(edge.to_string(), "data: road\nweight: 3");
        edge.set_weight(None);
        assert_eq!(edge.to_string(), "data: road\n");
    }

    #[test]
    fn test_other_end() {
        let (a, b) = two_vertex_ids();
        let edge: Edge<(), ()> = Edge::new(a, b);
        assert_eq!(edge.other_end(a), Some(b));
        assert_eq!(edge.other_end(b), Some(a));
        let looped: Edge<(), ()> = Edge::new(a, a);
        assert_eq!(looped.other_end(a), Some(a));
        assert_eq!(looped.other_end(b), None);
        assert!(!looped.touches(b));
    }
}
