//! Integration tests for the generator and the MST strategies.

use std::collections::HashSet;

use spanpath_graph::{
    component_count, is_connected, kruskal, minimum_spanning_tree, prim, GeneratorConfig, Graph,
    GraphError, MstAlgorithm, NodeId, RandomConnectedGraphGenerator, SpanningTree, UnionFind,
};

fn random_graph(nodes: usize, p: f64, directed: bool, seed: u64) -> Graph {
    let config = GeneratorConfig::new()
        .with_edge_probability(p)
        .with_directed(directed)
        .with_seed(seed);
    RandomConnectedGraphGenerator::new(config)
        .unwrap()
        .generate(nodes)
        .unwrap()
}

/// Place two graphs side by side with no edge between them.
fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
    let offset = a.num_nodes() as u32;
    let mut edges: Vec<_> = a.edges().map(|e| e.triple()).collect();
    edges.extend(b.edges().map(|e| (e.source.0 + offset, e.target.0 + offset, e.weight)));
    Graph::from_edges(a.num_nodes() + b.num_nodes(), false, &edges).unwrap()
}

/// Check that the selected edges contain no cycle.
fn is_acyclic(n: usize, tree: &SpanningTree) -> bool {
    let mut uf = UnionFind::new(n);
    tree.edges().iter().all(|e| uf.union(e.source, e.target))
}

/// Undirected generator output is a single component for every size.
#[test]
fn test_generator_connectivity() {
    for nodes in 1..40 {
        for &p in &[0.0, 0.05, 0.3, 1.0] {
            let graph = random_graph(nodes, p, false, nodes as u64 * 31);
            assert!(is_connected(&graph), "nodes={} p={}", nodes, p);
            assert_eq!(component_count(&graph), 1);
        }
    }
}

/// Generated graphs never contain self-loops or duplicate edges.
#[test]
fn test_generator_simple_graphs() {
    for seed in 0..10 {
        for directed in [false, true] {
            let graph = random_graph(30, 0.4, directed, seed);
            let mut seen = HashSet::new();

            for edge in graph.edges() {
                assert_ne!(edge.source, edge.target);
                let key = if directed {
                    (edge.source, edge.target)
                } else {
                    (edge.source.min(edge.target), edge.source.max(edge.target))
                };
                assert!(seen.insert(key), "duplicate edge {}", edge);
            }
        }
    }
}

/// Kruskal and Prim agree on total weight for connected graphs.
#[test]
fn test_kruskal_and_prim_same_weight() {
    for seed in 0..25 {
        let graph = random_graph(35, 0.2, false, seed);

        let k = kruskal(&graph).unwrap();
        let p = prim(graph.clone()).unwrap();

        assert_eq!(k.total_weight(), p.total_weight(), "seed {}", seed);
        assert!(k.is_spanning());
        assert!(p.is_spanning());
        assert!(is_acyclic(graph.num_nodes(), &k));
        assert!(is_acyclic(graph.num_nodes(), &p));
    }
}

/// Every MST edge comes from the input graph with its original weight.
#[test]
fn test_tree_edges_exist_in_graph() {
    let graph = random_graph(20, 0.5, false, 99);

    for algorithm in MstAlgorithm::ALL {
        let tree = minimum_spanning_tree(&graph, algorithm).unwrap();
        for edge in tree.edges() {
            assert_eq!(graph.weight(edge.source, edge.target), Some(edge.weight));
        }
    }
}

/// Kruskal on a disconnected graph yields N - components edges; Prim refuses.
#[test]
fn test_disconnected_forest() {
    let a = random_graph(12, 0.3, false, 1);
    let b = random_graph(8, 0.3, false, 2);
    let c = random_graph(1, 0.3, false, 3);
    let graph = disjoint_union(&disjoint_union(&a, &b), &c);

    assert_eq!(component_count(&graph), 3);

    let forest = kruskal(&graph).unwrap();
    assert_eq!(forest.len(), graph.num_nodes() - 3);
    assert_eq!(forest.component_count(), 3);
    assert!(is_acyclic(graph.num_nodes(), &forest));

    // Forest weight is the sum of the per-component minimum trees
    let expected = kruskal(&a).unwrap().total_weight() + kruskal(&b).unwrap().total_weight();
    assert_eq!(forest.total_weight(), expected);

    assert!(matches!(
        prim(graph),
        Err(GraphError::GraphNotConnected { total: 21, .. })
    ));
}

/// The four-node reference graph has MST weight -9 under both strategies.
#[test]
fn test_four_node_reference() {
    let graph = Graph::from_edges(
        4,
        false,
        &[
            (0, 1, 12),
            (0, 2, -4),
            (0, 3, -1),
            (1, 2, 14),
            (1, 3, -4),
            (2, 3, 5),
        ],
    )
    .unwrap();

    for algorithm in MstAlgorithm::ALL {
        let tree = minimum_spanning_tree(&graph, algorithm).unwrap();
        assert_eq!(tree.total_weight(), -9, "{}", algorithm);

        let mut chosen: Vec<_> = tree
            .edges()
            .iter()
            .map(|e| (e.source.min(e.target), e.source.max(e.target)))
            .collect();
        chosen.sort();
        assert_eq!(
            chosen,
            vec![
                (NodeId(0), NodeId(2)),
                (NodeId(0), NodeId(3)),
                (NodeId(1), NodeId(3))
            ]
        );
    }
}

/// Union-find groups stay consistent across arbitrary union sequences.
#[test]
fn test_union_find_groups() {
    let mut uf = UnionFind::new(50);
    let pairs: Vec<(u32, u32)> = (0..40).map(|i| ((i * 7) % 50, (i * 13 + 5) % 50)).collect();

    for &(a, b) in &pairs {
        uf.union(NodeId(a), NodeId(b));
        assert_eq!(uf.find(NodeId(a)), uf.find(NodeId(b)));
    }

    for &(a, b) in &pairs {
        assert!(uf.connected(NodeId(a), NodeId(b)));
        let root = uf.find(NodeId(a));
        assert_eq!(uf.find(root), root);
    }
}
