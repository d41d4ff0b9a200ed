use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::concepts::demand::Demand;
use crate::concepts::graph::Graph;
use crate::framework::RsaSystem;

/// Seeded synthetic workload: uniformly random node pairs with slot widths
/// bounded by the smallest link capacity in the topology. The same seed
/// always yields the same demand sequence, so runs can be replayed; tests
/// that need exact control supply a fixed `Vec<Demand>` instead.
pub struct RandomWorkload<T: RsaSystem + ?Sized> {
    rng: StdRng,
    nodes: Vec<T::NodeId>,
    max_width: usize,
    remaining: usize,
    next_id: u32,
}

impl<T: RsaSystem> RandomWorkload<T>
where
    T::DemandId: From<u32>,
{
    pub fn new(graph: &Graph<T>, default_capacity: usize, count: usize, seed: u64) -> Self {
        let max_width = graph
            .links()
            .map(|(_, link)| link.capacity.unwrap_or(default_capacity))
            .min()
            .unwrap_or(default_capacity)
            .max(1);
        RandomWorkload {
            rng: StdRng::seed_from_u64(seed),
            nodes: graph.node_ids().cloned().collect(),
            max_width,
            remaining: count,
            next_id: 0,
        }
    }
}

impl<T: RsaSystem> Iterator for RandomWorkload<T>
where
    T::DemandId: From<u32>,
{
    type Item = Demand<T>;

    fn next(&mut self) -> Option<Demand<T>> {
        if self.remaining == 0 || self.nodes.is_empty() {
            return None;
        }
        self.remaining -= 1;

        let n = self.nodes.len();
        let from = self.nodes[self.rng.random_range(0..n)].clone();
        let to = loop {
            let candidate = &self.nodes[self.rng.random_range(0..n)];
            if n == 1 || *candidate != from {
                break candidate.clone();
            }
        };
        let slots = self.rng.random_range(1..=self.max_width);
        let id = T::DemandId::from(self.next_id);
        self.next_id += 1;

        Some(Demand {
            id,
            from,
            to,
            slots,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.nodes.is_empty() {
            (0, Some(0))
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}
