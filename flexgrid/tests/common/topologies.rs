use flexgrid::concepts::graph::Graph;

use crate::common::test_net::{build_graph, TestNet};

/// Four-node diamond with distinct edge weights. The two cheapest simple
/// paths from A to D are A->B->D (3) and A->C->D (5).
pub fn diamond() -> Graph<TestNet> {
    build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "D", 2.0),
            ("A", "C", 2.0),
            ("C", "D", 3.0),
        ],
    )
}

/// Square with two equal-cost paths from A to D, for tie-break checks.
pub fn square() -> Graph<TestNet> {
    build_graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "D", 1.0),
            ("A", "C", 1.0),
            ("C", "D", 1.0),
        ],
    )
}

/// One link between two nodes.
pub fn single_link() -> Graph<TestNet> {
    build_graph(&["A", "B"], &[("A", "B", 1.0)])
}

/// A-B-C chain, two links.
pub fn chain() -> Graph<TestNet> {
    build_graph(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 1.0)])
}

/// Two disconnected components: {A, B} and {C, D}.
pub fn split_components() -> Graph<TestNet> {
    build_graph(&["A", "B", "C", "D"], &[("A", "B", 1.0), ("C", "D", 1.0)])
}
