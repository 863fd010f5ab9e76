//! Fuzz target for union-find.
//!
//! Applies random unions and checks the component count against a naive
//! label-merging model.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanpath_graph::{NodeId, UnionFind};

#[derive(Debug, Arbitrary)]
enum UfOp {
    Union { x: u8, y: u8 },
    Find { x: u8 },
    Connected { x: u8, y: u8 },
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    size: u8,
    ops: Vec<UfOp>,
}

fuzz_target!(|input: FuzzInput| {
    let n = (input.size % 64) as usize + 1;
    if input.ops.len() > 1000 {
        return;
    }

    let mut uf = UnionFind::new(n);
    let mut labels: Vec<usize> = (0..n).collect();
    let node = |x: u8| NodeId((x as usize % n) as u32);

    for op in &input.ops {
        match *op {
            UfOp::Union { x, y } => {
                let (a, b) = (node(x), node(y));
                let merged = uf.union(a, b);
                let (la, lb) = (labels[a.index()], labels[b.index()]);
                assert_eq!(merged, la != lb);
                for label in labels.iter_mut() {
                    if *label == la {
                        *label = lb;
                    }
                }
            }
            UfOp::Find { x } => {
                let root = uf.find(node(x));
                assert_eq!(labels[root.index()], labels[node(x).index()]);
                assert_eq!(uf.find(root), root);
            }
            UfOp::Connected { x, y } => {
                let (a, b) = (node(x), node(y));
                assert_eq!(uf.connected(a, b), labels[a.index()] == labels[b.index()]);
            }
        }
    }

    let mut distinct = labels.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(uf.num_components(), distinct.len());
});
