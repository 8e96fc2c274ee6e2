//! Height-bounded spanning arborescence over a directed matrix graph.
//!
//! The tree is grown greedily from the first vertex, taking pending edges in
//! discovery order, then repaired: while some vertex lies deeper than the
//! budget, the children of every vertex sitting exactly at the budget are
//! re-attached directly to the root.  Each pass lifts the overflowing
//! subtrees by at least one level, so the loop terminates, but the result
//! tends towards a star and is not a minimum-height tree in general.
use std::collections::{HashMap, HashSet, VecDeque};

use bitvec::prelude::*;
use tracing::{debug, info_span};

use super::MatrixGraph;
use crate::{
    error::{GraphError, Result},
    graph::Graph,
    id::{EdgeId, VertexId},
};

/// An edge of a spanning tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeEdge {
    pub from: VertexId,
    pub to: VertexId,
    /// The graph edge this tree edge came from, or `None` for a link from
    /// the root added while repairing the tree height.  Such links need not
    /// exist in the graph.
    pub edge: Option<EdgeId>,
}

impl TreeEdge {
    pub fn is_synthetic(&self) -> bool {
        self.edge.is_none()
    }
}

impl<N, D, W> MatrixGraph<N, D, W>
where
    W: Ord,
{
    /// Builds a spanning arborescence rooted at the first vertex in which no
    /// vertex is more than `max_height - 1` edges below the root.
    ///
    /// Vertices unreachable from the root are left out of the tree.  Returns
    /// an empty tree if the graph has no vertices or if `max_height < 2`;
    /// fails with [`GraphError::UnsupportedOperation`] on an undirected
    /// graph.
    pub fn find_spanning_tree_with_height_limit(&self, max_height: usize) -> Result<Vec<TreeEdge>> {
        let _span = info_span!("find_spanning_tree_with_height_limit", max_height).entered();
        if !self.is_directed() {
            return Err(GraphError::UnsupportedOperation(
                "height-bounded spanning trees require a directed graph",
            ));
        }
        let Some(&root) = self.order.first() else {
            return Ok(Vec::new());
        };
        if max_height < 2 {
            debug!(max_height, "height limit leaves no room below the root");
            return Ok(Vec::new());
        }

        // The root already occupies level 0.
        let budget = max_height - 1;
        let mut tree = self.grow_arborescence();
        debug!(edges = tree.len(), height = tree_height(&tree, root), "grew arborescence");

        let mut passes = 0;
        while tree_height(&tree, root) > budget {
            hoist_overflow(&mut tree, root, budget);
            passes += 1;
        }
        debug!(edges = tree.len(), passes, "repaired tree height");
        Ok(tree)
    }

    /// Grows a tree from position 0, always expanding along the oldest
    /// pending edge.
    fn grow_arborescence(&self) -> Vec<TreeEdge> {
        let n = self.order.len();
        let mut visited = bitvec![0; n];
        let mut pending: VecDeque<(usize, usize, EdgeId)> = VecDeque::new();
        let mut tree = Vec::with_capacity(n.saturating_sub(1));

        visited.set(0, true);
        pending.extend(self.row_entries(0).map(|(j, eid)| (0, j, eid)));
        while tree.len() + 1 < n {
            let Some((i, j, eid)) = pending.pop_front() else {
                break;
            };
            if visited[j] {
                continue;
            }
            visited.set(j, true);
            tree.push(TreeEdge {
                from: self.order[i],
                to: self.order[j],
                edge: Some(eid),
            });
            pending.extend(self.row_entries(j).map(|(k, eid)| (j, k, eid)));
        }
        tree
    }
}

fn children_by_parent(tree: &[TreeEdge]) -> HashMap<VertexId, Vec<VertexId>> {
    let mut children: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
    for tree_edge in tree {
        children
            .entry(tree_edge.from)
            .or_default()
            .push(tree_edge.to);
    }
    children
}

/// Depth of every vertex reachable from `root` through `tree`.
fn depths(tree: &[TreeEdge], root: VertexId) -> HashMap<VertexId, usize> {
    let children = children_by_parent(tree);
    let mut depth = HashMap::from([(root, 0)]);
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        let next_depth = depth[&current] + 1;
        for &child in children.get(&current).into_iter().flatten() {
            if !depth.contains_key(&child) {
                depth.insert(child, next_depth);
                queue.push_back(child);
            }
        }
    }
    depth
}

fn tree_height(tree: &[TreeEdge], root: VertexId) -> usize {
    depths(tree, root).into_values().max().unwrap_or(0)
}

/// Re-parents to the root every child of a vertex at depth `budget`.
fn hoist_overflow(tree: &mut Vec<TreeEdge>, root: VertexId, budget: usize) {
    let children = children_by_parent(tree);
    let mut hoisted = Vec::new();
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([(root, 0)]);
    while let Some((current, depth)) = queue.pop_front() {
        for &child in children.get(&current).into_iter().flatten() {
            if depth < budget {
                if seen.insert(child) {
                    queue.push_back((child, depth + 1));
                }
            } else {
                hoisted.push(child);
            }
        }
    }

    let hoisted_set: HashSet<VertexId> = hoisted.iter().copied().collect();
    tree.retain(|tree_edge| !hoisted_set.contains(&tree_edge.to));
    tree.extend(hoisted.into_iter().map(|child| TreeEdge {
        from: root,
        to: child,
        edge: None,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestGraph = MatrixGraph<&'static str, i32, u32>;

    fn chain(len: usize, close: bool) -> (TestGraph, Vec<VertexId>) {
        let mut graph = TestGraph::directed();
        let names = ["v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8", "v9"];
        let vertices: Vec<_> = (0..len)
            .map(|i| graph.insert_vertex(names[i], i as i32))
            .collect();
        for pair in vertices.windows(2) {
            graph.insert_edge(pair[0], pair[1]).unwrap();
        }
        if close {
            graph.insert_edge(vertices[len - 1], vertices[0]).unwrap();
        }
        (graph, vertices)
    }

    #[test]
    fn test_undirected_graph_is_unsupported() {
        let mut graph = TestGraph::undirected();
        graph.insert_vertex("a", 0);
        assert!(matches!(
            graph.find_spanning_tree_with_height_limit(3),
            Err(GraphError::UnsupportedOperation(_))
        ));
        let empty = TestGraph::undirected();
        assert!(matches!(
            empty.find_spanning_tree_with_height_limit(3),
            Err(GraphError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_small_limits_and_empty_graph_give_empty_tree() {
        let (graph, _) = chain(4, false);
        assert_eq!(graph.find_spanning_tree_with_height_limit(0), Ok(vec![]));
        assert_eq!(graph.find_spanning_tree_with_height_limit(1), Ok(vec![]));
        assert_eq!(
            TestGraph::directed().find_spanning_tree_with_height_limit(3),
            Ok(vec![])
        );
    }

    #[test]
    fn test_tree_within_limit_is_untouched() {
        let (graph, vertices) = chain(4, false);
        let tree = graph.find_spanning_tree_with_height_limit(4).unwrap();
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().all(|tree_edge| !tree_edge.is_synthetic()));
        for (tree_edge, pair) in tree.iter().zip(vertices.windows(2)) {
            assert_eq!((tree_edge.from, tree_edge.to), (pair[0], pair[1]));
            assert_eq!(tree_edge.edge, graph.get_edge(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_seven_vertex_cycle_flattens_to_star() {
        let (graph, vertices) = chain(7, true);
        let root = vertices[0];
        let tree = graph.find_spanning_tree_with_height_limit(2).unwrap();
        assert_eq!(tree.len(), 6);
        assert!(tree.iter().all(|tree_edge| tree_edge.from == root));
        let targets: HashSet<_> = tree.iter().map(|tree_edge| tree_edge.to).collect();
        assert_eq!(targets, vertices[1..].iter().copied().collect());
        assert_eq!(tree_height(&tree, root), 1);
        // Only the root's own edge came from the graph.
        assert_eq!(tree.iter().filter(|t| !t.is_synthetic()).count(), 1);
    }

    #[test]
    fn test_height_three_on_chain() {
        let (graph, vertices) = chain(6, false);
        let root = vertices[0];
        let tree = graph.find_spanning_tree_with_height_limit(3).unwrap();
        assert_eq!(tree.len(), 5);
        let depth = depths(&tree, root);
        assert_eq!(depth.len(), 6);
        assert!(depth.values().all(|&d| d <= 2));
    }

    #[test]
    fn test_unreachable_vertices_are_left_out() {
        let mut graph = TestGraph::directed();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let c = graph.insert_vertex("c", 2);
        graph.insert_edge(a, b).unwrap();
        graph.insert_edge(c, a).unwrap();
        let tree = graph.find_spanning_tree_with_height_limit(2).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!((tree[0].from, tree[0].to), (a, b));
    }

    #[test]
    fn test_first_discovered_edge_wins() {
        let mut graph = TestGraph::directed();
        let a = graph.insert_vertex("a", 0);
        let b = graph.insert_vertex("b", 1);
        let c = graph.insert_vertex("c", 2);
        let d = graph.insert_vertex("d", 3);
        graph.insert_edge(a, b).unwrap();
        graph.insert_edge(a, c).unwrap();
        let bd = graph.insert_edge(b, d).unwrap();
        graph.insert_edge(c, d).unwrap();
        let tree = graph.find_spanning_tree_with_height_limit(5).unwrap();
        let into_d: Vec<_> = tree.iter().filter(|t| t.to == d).collect();
        assert_eq!(into_d.len(), 1);
        assert_eq!(into_d[0].edge, Some(bd));
    }
}
