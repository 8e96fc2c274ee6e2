use std::collections::{HashMap, HashSet};

use tracing::{info_span, trace};

use crate::{
    directedness::Directedness,
    entity::{Edge, Vertex},
    error::{GraphError, Result},
    graph::Graph,
    id::{EdgeId, VertexId},
    list_graph::ListGraph,
    store::Store,
};

use self::cell::Cell;

mod cell;
mod cycle;
mod spanning_tree;

pub use spanning_tree::TreeEdge;

/// A graph that stores its edges in an n×n grid of cells, where row and
/// column `i` belong to the `i`th vertex in insertion order.
///
/// Looking up, inserting or deleting the edge between two vertices is O(1)
/// once their positions are known; positions are kept in an index keyed by
/// vertex handle.  Removing a vertex deletes its row and column and shifts
/// the positions of all later vertices down by one.  Handles are unaffected.
///
/// At most one edge occupies a cell.  In an undirected graph an edge occupies
/// the two mirror cells `(i, j)` and `(j, i)`.
///
/// # Type Parameters
/// * `N` - The type of vertex names
/// * `D` - The type of vertex and edge data
/// * `W` - The type of edge weights
#[derive(Clone, Debug)]
pub struct MatrixGraph<N, D, W> {
    store: Store<N, D, W>,
    order: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    cells: Vec<Vec<Cell>>,
    directedness: Directedness,
}

impl<N, D, W> MatrixGraph<N, D, W>
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

    /// Gets the row/column position of a vertex.
    fn position(&self, vertex: VertexId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    fn require_position(&self, vertex: VertexId) -> Result<usize> {
        self.position(vertex)
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    /// Gets the occupied cells of row `i` as `(column, edge)` pairs.
    fn row_entries(&self, i: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        self.cells[i]
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.edge().map(|eid| (j, eid)))
    }

    /// Rebuilds positions for vertices from `start` onwards.
    fn reindex_from(&mut self, start: usize) {
        for (i, &vid) in self.order.iter().enumerate().skip(start) {
            self.index.insert(vid, i);
        }
    }

    pub(crate) fn into_store(self) -> (Store<N, D, W>, Directedness) {
        (self.store, self.directedness)
    }
}

impl<N, D, W> Graph for MatrixGraph<N, D, W>
where
    W: Ord,
{
    type Name = N;
    type VertexData = D;
    type Weight = W;

    fn new(directedness: Directedness) -> Self {
        Self {
            store: Store::new(),
            order: Vec::new(),
            index: HashMap::new(),
            cells: Vec::new(),
            directedness,
        }
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn insert_vertex(&mut self, name: N, data: D) -> VertexId {
        let vid = self.store.add_vertex(name, data);
        for row in &mut self.cells {
            row.push(Cell::Empty);
        }
        self.order.push(vid);
        self.cells.push(vec![Cell::Empty; self.order.len()]);
        self.index.insert(vid, self.order.len() - 1);
        trace!(vertex = ?vid, position = self.order.len() - 1, "inserted vertex");
        vid
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        let Some(i) = self.position(vertex) else {
            return false;
        };
        let mut doomed: HashSet<EdgeId> = self.cells[i].iter().filter_map(|c| c.edge()).collect();
        doomed.extend(self.cells.iter().filter_map(|row| row[i].edge()));
        for &eid in &doomed {
            self.store.remove_edge(eid);
        }

        self.cells.remove(i);
        for row in &mut self.cells {
            row.remove(i);
        }
        self.order.remove(i);
        self.index.remove(&vertex);
        self.reindex_from(i);
        self.store.remove_vertex(vertex);
        trace!(vertex = ?vertex, position = i, edges = doomed.len(), "removed vertex");
        true
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        let i = self.require_position(from)?;
        let j = self.require_position(to)?;
        let replaced = self.cells[i][j].take();
        if let Some(old) = replaced {
            self.store.remove_edge(old);
        }
        let eid = self.store.add_edge(from, to);
        self.cells[i][j] = Cell::Edge(eid);
        if !self.is_directed() {
            self.cells[j][i] = Cell::Edge(eid);
        }
        trace!(edge = ?eid, ?from, ?to, replaced = replaced.is_some(), "inserted edge");
        Ok(eid)
    }

    fn delete_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let (Some(i), Some(j)) = (self.position(from), self.position(to)) else {
            return false;
        };
        if let Some(old) = self.cells[i][j].take() {
            self.store.remove_edge(old);
            if !self.is_directed() {
                self.cells[j][i] = Cell::Empty;
            }
            trace!(edge = ?old, ?from, ?to, "deleted edge");
        }
        true
    }

    fn get_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        self.cells[i][j].edge()
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
        self.order.iter().copied()
    }

    /// Gets an iterator over all edges in row-major order.  For an undirected
    /// graph only the upper triangle is read, so each edge appears once.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        let undirected = !self.is_directed();
        (0..self.cells.len()).flat_map(move |i| {
            self.row_entries(i)
                .filter(move |&(j, _)| !undirected || j >= i)
                .map(|(_, eid)| eid)
        })
    }

    fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.position(vertex)
            .into_iter()
            .flat_map(move |i| self.row_entries(i).map(|(_, eid)| eid))
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    fn num_vertices(&self) -> usize {
        self.order.len()
    }

    fn num_edges(&self) -> usize {
        self.store.num_edges()
    }
}

impl<N, D, W> From<ListGraph<N, D, W>> for MatrixGraph<N, D, W>
where
    W: Ord,
{
    /// Converts a list graph by laying out its vertices in iteration order
    /// and placing each edge record in its cell.  The records move over
    /// unchanged, so every handle issued by the list graph stays valid.
    fn from(list: ListGraph<N, D, W>) -> Self {
        let (store, adjacency, directedness) = list.into_parts();
        let _span = info_span!("matrix_graph_from_list", vertices = adjacency.len()).entered();
        let order: Vec<VertexId> = adjacency.keys().copied().collect();
        let index: HashMap<VertexId, usize> =
            order.iter().enumerate().map(|(i, &vid)| (vid, i)).collect();
        let mut cells = vec![vec![Cell::Empty; order.len()]; order.len()];
        for &eid in adjacency.values().flatten() {
            let edge = store.linked_edge(eid);
            let (i, j) = (index[&edge.from()], index[&edge.to()]);
            cells[i][j] = Cell::Edge(eid);
            if !directedness.is_directed() {
                cells[j][i] = Cell::Edge(eid);
            }
        }
        Self {
            store,
            order,
            index,
            cells,
            directedness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestGraph = MatrixGraph<&'static str, i32, u32>;

    graph_tests!(MatrixGraph);

    #[test]
    fn test_positions_shift_after_removal() {
        let mut graph = TestGraph::directed();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let c = graph.insert_vertex("c", 2);
        let d = graph.insert_vertex("d", 3);
        let cd = graph.insert_edge(c, d).unwrap();
        let da = graph.insert_edge(d, a).unwrap();

        assert!(graph.remove_vertex(b));
        assert_eq!(graph.position(a), Some(0));
        assert_eq!(graph.position(c), Some(1));
        assert_eq!(graph.position(d), Some(2));
        assert_eq!(graph.position(b), None);
        assert_eq!(graph.cells.len(), 3);
        assert!(graph.cells.iter().all(|row| row.len() == 3));
        assert_eq!(graph.get_edge(c, d), Some(cd));
        assert_eq!(graph.get_edge(d, a), Some(da));
    }

    #[test]
    fn test_overwrite_drops_previous_edge() {
        let mut graph = TestGraph::directed();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let first = graph.insert_edge(a, b).unwrap();
        let second = graph.insert_edge(a, b).unwrap();
        assert_ne!(first, second);
        assert!(graph.edge(first).is_none());
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_undirected_edge_fills_mirror_cells() {
        let mut graph = TestGraph::undirected();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let ab = graph.insert_edge(a, b).unwrap();
        assert_eq!(graph.cells[0][1], Cell::Edge(ab));
        assert_eq!(graph.cells[1][0], Cell::Edge(ab));
        assert!(graph.delete_edge(b, a));
        assert_eq!(graph.cells[0][1], Cell::Empty);
        assert_eq!(graph.cells[1][0], Cell::Empty);
    }

    #[test]
    fn test_edge_ids_are_row_major() {
        let mut graph = TestGraph::directed();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let ba = graph.insert_edge(b, a).unwrap();
        let bb = graph.insert_edge(b, b).unwrap();
        let ab = graph.insert_edge(a, b).unwrap();
        assert_eq!(graph.edge_ids().collect::<Vec<_>>(), vec![ab, ba, bb]);
    }

    #[test]
    fn test_from_list_keeps_handles() {
        let mut list: ListGraph<&'static str, i32, u32> = ListGraph::undirected();
        let a = list.insert_vertex("a", 0);
        let b = list.insert_vertex("b", 1);
        let c = list.insert_vertex("c", 2);
        let ab = list.insert_edge(a, b).unwrap();
        let cc = list.insert_edge(c, c).unwrap();
        assert!(list.remove_vertex(a));
        let bc = list.insert_edge(b, c).unwrap();

        let matrix = MatrixGraph::from(list);
        assert!(!matrix.is_directed());
        assert_eq!(matrix.vertex_ids().collect::<Vec<_>>(), vec![b, c]);
        assert!(matrix.edge(ab).is_none());
        assert_eq!(matrix.get_edge(c, b), Some(bc));
        assert_eq!(matrix.get_edge(c, c), Some(cc));
        assert_eq!(matrix.num_edges(), 2);
    }
}
