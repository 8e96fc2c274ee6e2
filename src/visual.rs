//! A display-oriented projection of a graph: a flat node list and edge list
//! that an external renderer turns into a picture.  Nothing here knows about
//! the renderer; the JSON field names follow the node/edge records that
//! vis.js style network views consume.
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use rand::Rng;
use serde::Serialize;

use crate::{graph::Graph, id::VertexId};

/// A node of the projection.  `id` is random and only meaningful within the
/// projection it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisualNode {
    pub id: u32,
    pub label: String,
}

/// How a [`VisualEdge`] is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ArrowDirection {
    /// Arrow head at the `to` end.
    #[serde(rename = "to")]
    To,
    /// No arrow head.
    #[serde(rename = "")]
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VisualEdge {
    pub from: u32,
    pub to: u32,
    #[serde(rename = "arrows")]
    pub arrow_direction: ArrowDirection,
    pub label: String,
}

/// The node/edge list produced by [`Graph::to_visual_graph`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisualGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl VisualGraph {
    /// Builds the projection of `graph`.  Every vertex becomes a node
    /// labelled with its display form, and every edge becomes one display
    /// edge, directed or not according to the graph.
    pub fn project<G>(graph: &G) -> Self
    where
        G: Graph,
        G::Name: Display,
        G::VertexData: Display,
        G::Weight: Display,
    {
        let mut rng = rand::thread_rng();
        let mut used = HashSet::new();
        let mut node_ids: HashMap<VertexId, u32> = HashMap::new();
        let mut nodes = Vec::with_capacity(graph.num_vertices());
        for vid in graph.vertex_ids() {
            let Some(vertex) = graph.vertex(vid) else {
                continue;
            };
            let id = loop {
                let candidate: u32 = rng.r#gen();
                if used.insert(candidate) {
                    break candidate;
                }
            };
            node_ids.insert(vid, id);
            nodes.push(VisualNode {
                id,
                label: vertex.to_string(),
            });
        }

        let arrow_direction = if graph.is_directed() {
            ArrowDirection::To
        } else {
            ArrowDirection::None
        };
        let edges = graph
            .edge_ids()
            .filter_map(|eid| {
                let edge = graph.edge(eid)?;
                Some(VisualEdge {
                    from: *node_ids.get(&edge.from())?,
                    to: *node_ids.get(&edge.to())?,
                    arrow_direction,
                    label: edge.to_string(),
                })
            })
            .collect();

        Self { nodes, edges }
    }

    /// Encodes the node list as a JSON array.
    pub fn nodes_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.nodes)
    }

    /// Encodes the edge list as a JSON array.
    pub fn edges_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.edges)
    }

    /// Finds the node with the given label.
    pub fn node_by_label(&self, label: &str) -> Option<&VisualNode> {
        self.nodes.iter().find(|node| node.label == label)
    }
}
