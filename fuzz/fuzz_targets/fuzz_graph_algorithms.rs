//! Fuzz target for the spanning tree and shortest path algorithms.
//!
//! Builds a graph from an arbitrary edge list and checks that Kruskal and
//! Prim agree, and that Bellman-Ford distances are a relaxation fixed point.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanpath_graph::{
    bellman_ford, is_connected, kruskal, prim, Graph, NodeId, PathWeight, ShortestPaths,
};

#[derive(Debug, Arbitrary)]
struct FuzzEdge {
    u: u8,
    v: u8,
    weight: i64,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    num_nodes: u8,
    directed: bool,
    source: u8,
    edges: Vec<FuzzEdge>,
}

fuzz_target!(|input: FuzzInput| {
    let n = (input.num_nodes % 32) as usize + 1;
    if input.edges.len() > 512 {
        return;
    }

    let mut graph = Graph::new(n, input.directed);
    for e in &input.edges {
        let u = NodeId((e.u as usize % n) as u32);
        let v = NodeId((e.v as usize % n) as u32);
        // Self-loops and duplicates are rejected; that is fine here.
        let _ = graph.add_edge(u, v, e.weight);
    }

    if !graph.is_directed() {
        let k = kruskal(&graph).expect("kruskal accepts undirected graphs");
        assert!(k.len() < n);

        if is_connected(&graph) {
            assert!(k.is_spanning());
            let p = prim(graph.clone()).expect("prim on a connected graph");
            assert_eq!(k.total_weight(), p.total_weight());
            assert_eq!(k.len(), p.len());
        }
    }

    let source = NodeId((input.source as usize % n) as u32);
    match bellman_ford(&graph, source).expect("source is in range") {
        ShortestPaths::Distances(map) => {
            assert_eq!(map.len(), n);
            assert_eq!(map.get(source).map(|d| d.is_reachable()), Some(true));
            for edge in graph.edges() {
                let du = map.get(edge.source).unwrap();
                let dv = map.get(edge.target).unwrap();
                if let Some(u) = du.finite() {
                    let v = dv.finite().expect("target of a reached node is reached");
                    assert!(v <= u + PathWeight::from(edge.weight), "edge {} not relaxed", edge);
                }
            }
        }
        ShortestPaths::NegativeCycleDetected => {
            assert!(graph.edges().any(|e| e.weight < 0));
        }
    }
});
