use flexgrid::workload::RandomWorkload;

mod common;

use common::test_net::{allocator, freeze, TestNet};

fn run_seeded(seed: u64) -> (String, String) {
    let graph = common::topologies::diamond();
    let demands: Vec<_> = RandomWorkload::<TestNet>::new(&graph, 8, 50, seed).collect();
    let mut alloc = allocator(graph, 2, 8);
    let summary = alloc.process_all(demands).unwrap();
    assert_eq!(summary.total, 50);
    (
        serde_json::to_string(&alloc.outcomes).unwrap(),
        freeze(&alloc),
    )
}

#[test]
fn replay_is_identical() {
    let (outcomes_a, table_a) = run_seeded(42);
    let (outcomes_b, table_b) = run_seeded(42);

    assert_eq!(outcomes_a, outcomes_b);
    assert_eq!(table_a, table_b);
}

#[test]
fn workload_is_deterministic_for_a_seed() {
    let graph = common::topologies::diamond();
    let a: Vec<_> = RandomWorkload::<TestNet>::new(&graph, 8, 20, 7).collect();
    let b: Vec<_> = RandomWorkload::<TestNet>::new(&graph, 8, 20, 7).collect();

    let a = serde_json::to_string(&a).unwrap();
    let b = serde_json::to_string(&b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn workload_respects_bounds() {
    let graph = common::topologies::diamond();
    let demands: Vec<_> = RandomWorkload::<TestNet>::new(&graph, 8, 100, 3).collect();

    assert_eq!(demands.len(), 100);
    for demand in &demands {
        assert_ne!(demand.from, demand.to);
        assert!(demand.slots >= 1 && demand.slots <= 8);
        assert!(graph.contains_node(&demand.from));
        assert!(graph.contains_node(&demand.to));
    }
}

#[test]
fn frozen_table_round_trips() {
    let graph = common::topologies::diamond();
    let demands: Vec<_> = RandomWorkload::<TestNet>::new(&graph, 8, 10, 1).collect();
    let mut alloc = allocator(graph, 2, 8);
    alloc.process_all(demands).unwrap();

    let frozen = freeze(&alloc);
    let restored: flexgrid::concepts::table::SpectrumTable<TestNet> =
        serde_json::from_str(&frozen).unwrap();
    assert_eq!(serde_json::to_string(&restored).unwrap(), frozen);
}
