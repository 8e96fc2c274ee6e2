#![allow(dead_code)]

use duograph::{Graph, VertexId};

pub const STARTER_NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Builds a graph of eight vertices named `A` to `H` with data `0` to `7`
/// and no edges.
pub fn starter_graph<G>(directedness: duograph::Directedness) -> (G, Vec<VertexId>)
where
    G: Graph<Name = &'static str, VertexData = i32>,
{
    let mut graph = G::new(directedness);
    let vertices = STARTER_NAMES
        .into_iter()
        .zip(0..)
        .map(|(name, data)| graph.insert_vertex(name, data))
        .collect();
    (graph, vertices)
}

/// Links each vertex to the next, and the last back to the first.
pub fn link_ring<G: Graph>(graph: &mut G, vertices: &[VertexId]) {
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        graph.insert_edge(from, to).unwrap();
    }
}
