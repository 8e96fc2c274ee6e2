mod common;

use std::collections::HashSet;

use duograph::{Directedness, Graph, ListGraph, MatrixGraph, visual::ArrowDirection};
use serde_json::Value;

use common::{STARTER_NAMES, link_ring, starter_graph};

#[test]
fn projection_json_has_renderer_fields() {
    let (mut graph, v) = starter_graph::<ListGraph<&'static str, i32, u32>>(Directedness::Directed);
    let ab = graph.insert_edge(v[0], v[1]).unwrap();
    graph.edge_mut(ab).unwrap().set_weight(Some(2));

    let visual = graph.to_visual_graph();
    let nodes: Value = serde_json::from_str(&visual.nodes_json().unwrap()).unwrap();
    let edges: Value = serde_json::from_str(&visual.edges_json().unwrap()).unwrap();

    let nodes = nodes.as_array().unwrap();
    assert_eq!(nodes.len(), 8);
    let labels: HashSet<_> = nodes.iter().map(|n| n["label"].as_str().unwrap()).collect();
    for (i, name) in STARTER_NAMES.iter().enumerate() {
        assert!(labels.contains(format!("name: {name}\ndata: {i}").as_str()));
    }
    assert!(nodes.iter().all(|n| n["id"].is_u64()));

    let edges = edges.as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["arrows"], "to");
    assert_eq!(edges[0]["label"], "weight: 2");
    let from = visual.node_by_label("name: A\ndata: 0").unwrap().id;
    let to = visual.node_by_label("name: B\ndata: 1").unwrap().id;
    assert_eq!(edges[0]["from"], from);
    assert_eq!(edges[0]["to"], to);
}

#[test]
fn undirected_projection_has_no_arrows() {
    let (mut graph, v) = starter_graph::<MatrixGraph<&'static str, i32, u32>>(Directedness::Undirected);
    link_ring(&mut graph, &v);

    let visual = graph.to_visual_graph();
    assert_eq!(visual.edges.len(), 8);
    assert!(visual.edges.iter().all(|e| e.arrow_direction == ArrowDirection::None));
    let edges: Value = serde_json::from_str(&visual.edges_json().unwrap()).unwrap();
    assert!(edges.as_array().unwrap().iter().all(|e| e["arrows"] == ""));
}

#[test]
fn repeated_projection_has_same_shape() {
    let (mut graph, v) = starter_graph::<MatrixGraph<&'static str, i32, u32>>(Directedness::Directed);
    link_ring(&mut graph, &v);
    let first = graph.to_visual_graph();
    let second = graph.to_visual_graph();
    assert_eq!(first.nodes.len(), second.nodes.len());
    assert_eq!(first.edges.len(), second.edges.len());

    let ids: HashSet<_> = first.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), first.nodes.len());
}

#[test]
fn empty_graph_projects_to_empty_arrays() {
    let graph: ListGraph<&'static str, i32, u32> = ListGraph::undirected();
    let visual = graph.to_visual_graph();
    assert_eq!(visual.nodes_json().unwrap(), "[]");
    assert_eq!(visual.edges_json().unwrap(), "[]");
}
