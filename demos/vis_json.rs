//! Builds a small graph, applies edits from the command line, and prints the
//! node and edge arrays a network renderer consumes.
//!
//! Usage:
//!   cargo run --example vis_json -- --edge 0:1 --edge 1:2:heavy --edge 2:0
//!   cargo run --example vis_json -- --edge 0:1 --edge 1:2 --max-height 2
//!   cargo run --example vis_json -- --edge 0:1 --edge 1:0 --cycle 0:2
//!   RUST_LOG=duograph=debug cargo run --example vis_json -- --cycle 0:3 --timings

use std::process;

use clap::Parser;
use duograph::tracing_support::{dump_span_timings, init_tracing};
use duograph::{Directedness, Graph, MatrixGraph, VertexId};

type DemoGraph = MatrixGraph<String, String, String>;

/// Print a graph as vis-style JSON node and edge arrays.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Build an undirected graph instead of a directed one
    #[arg(long)]
    undirected: bool,

    /// Number of starter vertices, named "0", "1", ...
    #[arg(long, default_value_t = 8)]
    vertices: usize,

    /// Add an edge, as FROM:TO or FROM:TO:DATA, using vertex names
    #[arg(long = "edge", value_parser = parse_edge)]
    edges: Vec<EdgeArg>,

    /// Remove a vertex by name after the edges are added
    #[arg(long = "remove")]
    removals: Vec<String>,

    /// Also print a spanning tree no taller than this
    #[arg(long)]
    max_height: Option<usize>,

    /// Also print a cycle, as NAME:LENGTH
    #[arg(long, value_parser = parse_named_number)]
    cycle: Option<(String, usize)>,

    /// Also print how many vertices lie at a hop distance, as NAME:DISTANCE
    #[arg(long, value_parser = parse_named_number)]
    count: Option<(String, usize)>,

    /// Print span timings to stderr on exit
    #[arg(long)]
    timings: bool,
}

#[derive(Clone, Debug)]
struct EdgeArg {
    from: String,
    to: String,
    data: Option<String>,
}

fn parse_edge(s: &str) -> Result<EdgeArg, String> {
    let mut parts = s.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), data) if !from.is_empty() && !to.is_empty() => Ok(EdgeArg {
            from: from.to_string(),
            to: to.to_string(),
            data: data.map(str::to_string),
        }),
        _ => Err(format!("expected FROM:TO or FROM:TO:DATA, got '{s}'")),
    }
}

fn parse_named_number(s: &str) -> Result<(String, usize), String> {
    let (name, number) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:NUMBER, got '{s}'"))?;
    let number = number
        .parse()
        .map_err(|err| format!("bad number in '{s}': {err}"))?;
    Ok((name.to_string(), number))
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut graph = DemoGraph::new(Directedness::from(!args.undirected));
    for i in 0..args.vertices {
        graph.insert_vertex(i.to_string(), i.to_string());
    }

    for edge in &args.edges {
        let from = lookup_or_exit(&graph, &edge.from);
        let to = lookup_or_exit(&graph, &edge.to);
        match graph.insert_edge(from, to) {
            Ok(eid) => {
                if let Some(edge_mut) = graph.edge_mut(eid) {
                    edge_mut.set_data(edge.data.clone());
                }
            }
            Err(err) => {
                eprintln!("Cannot add edge {}:{}: {err}", edge.from, edge.to);
                process::exit(1);
            }
        }
    }
    for name in &args.removals {
        let vertex = lookup_or_exit(&graph, name);
        graph.remove_vertex(vertex);
    }

    let visual = graph.to_visual_graph();
    match (visual.nodes_json(), visual.edges_json()) {
        (Ok(nodes), Ok(edges)) => {
            println!("nodes: {nodes}");
            println!("edges: {edges}");
        }
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("Failed to encode projection: {err}");
            process::exit(1);
        }
    }

    if let Some(max_height) = args.max_height {
        print_spanning_tree(&graph, max_height);
    }
    if let Some((name, length)) = &args.cycle {
        print_cycle(&graph, name, *length);
    }
    if let Some((name, distance)) = &args.count {
        print_count(&graph, name, *distance);
    }
    if args.timings {
        dump_span_timings();
    }
}

fn lookup_or_exit(graph: &DemoGraph, name: &str) -> VertexId {
    match graph.find_vertex_by_name(&name.to_string()) {
        Some(vertex) => vertex,
        None => {
            eprintln!("No vertex named '{name}'");
            process::exit(1);
        }
    }
}

fn name_of(graph: &DemoGraph, vertex: VertexId) -> &str {
    graph.vertex(vertex).map_or("?", |v| v.name().as_str())
}

fn print_spanning_tree(graph: &DemoGraph, max_height: usize) {
    match graph.find_spanning_tree_with_height_limit(max_height) {
        Ok(tree) => {
            println!("\nSpanning tree (max height {max_height}, {} edges):", tree.len());
            for tree_edge in tree {
                let marker = if tree_edge.is_synthetic() { " (hoisted)" } else { "" };
                println!(
                    "  {} -> {}{marker}",
                    name_of(graph, tree_edge.from),
                    name_of(graph, tree_edge.to)
                );
            }
        }
        Err(err) => eprintln!("No spanning tree: {err}"),
    }
}

fn print_cycle(graph: &DemoGraph, name: &str, length: usize) {
    let base = lookup_or_exit(graph, name);
    match graph.find_cycle_by_length(base, length) {
        Ok(cycle) if cycle.is_empty() => println!("\nNo cycle of length {length} through {name}"),
        Ok(cycle) => {
            println!("\nCycle of length {length} through {name}:");
            for eid in cycle {
                if let Some(edge) = graph.edge(eid) {
                    println!("  {} - {}", name_of(graph, edge.from()), name_of(graph, edge.to()));
                }
            }
        }
        Err(err) => eprintln!("Cycle search failed: {err}"),
    }
}

#[cfg(feature = "pathfinding")]
fn print_count(graph: &DemoGraph, name: &str, distance: usize) {
    let vertex = lookup_or_exit(graph, name);
    match graph.count_vertices_by_distance(vertex, distance) {
        Ok(count) => println!("\nVertices {distance} hops from {name}: {count}"),
        Err(err) => eprintln!("Count failed: {err}"),
    }
}

#[cfg(not(feature = "pathfinding"))]
fn print_count(_graph: &DemoGraph, _name: &str, _distance: usize) {
    eprintln!("Hop counts need the `pathfinding` feature");
}
