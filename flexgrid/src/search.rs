use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::concepts::graph::Graph;
use crate::concepts::path::NodePath;
use crate::framework::{PathSearch, RsaSystem};

/// K-shortest simple paths by repeated shortest-path search: each round
/// yields the cheapest loop-free path not returned before, so the result is
/// ranked ascending by total length. Ties are broken by frontier insertion
/// order, which only depends on the graph, keeping the ranking stable
/// across runs.
#[derive(Default)]
pub struct KShortest;

/// A partial path on the frontier. Ordered so the cheapest candidate (and
/// among equals, the earliest inserted) surfaces first from the max-heap.
struct Candidate<T: RsaSystem + ?Sized> {
    cost: f64,
    seq: u64,
    at: T::NodeId,
    hops: Vec<T::NodeId>,
}

impl<T: RsaSystem + ?Sized> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: RsaSystem + ?Sized> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: RsaSystem + ?Sized> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: RsaSystem + ?Sized> Eq for Candidate<T> {}

impl<T: RsaSystem> PathSearch<T> for KShortest {
    /// A search from a node to itself yields exactly one trivial zero-cost
    /// path, so such demands are supplied without reserving spectrum rather
    /// than counted as blocked. Disconnected or unknown endpoints yield an
    /// empty list.
    fn find_paths(
        &self,
        graph: &Graph<T>,
        from: &T::NodeId,
        to: &T::NodeId,
        k: usize,
    ) -> Vec<NodePath<T>> {
        let mut found = Vec::new();
        if k == 0 || !graph.contains_node(from) || !graph.contains_node(to) {
            return found;
        }
        if from == to {
            found.push(NodePath::trivial(from.clone()));
            return found;
        }

        let mut seq: u64 = 0;
        let mut frontier: BinaryHeap<Candidate<T>> = BinaryHeap::new();
        frontier.push(Candidate {
            cost: 0.0,
            seq,
            at: from.clone(),
            hops: vec![from.clone()],
        });

        while let Some(cand) = frontier.pop() {
            if cand.at == *to {
                trace!("path candidate #{} costs {}", found.len() + 1, cand.cost);
                found.push(NodePath {
                    hops: cand.hops,
                    cost: cand.cost,
                });
                if found.len() == k {
                    break;
                }
                continue;
            }
            for (next, length) in graph.neighbours(&cand.at) {
                // simple paths only, never revisit a node
                if cand.hops.contains(next) {
                    continue;
                }
                seq += 1;
                let mut hops = cand.hops.clone();
                hops.push(next.clone());
                frontier.push(Candidate {
                    cost: cand.cost + length,
                    seq,
                    at: next.clone(),
                    hops,
                });
            }
        }
        found
    }
}
