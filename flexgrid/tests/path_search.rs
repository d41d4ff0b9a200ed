use flexgrid::framework::PathSearch;
use flexgrid::search::KShortest;

mod common;

use common::test_net::build_graph;

fn hops(path: &flexgrid::concepts::path::NodePath<common::test_net::TestNet>) -> Vec<&str> {
    path.hops.iter().map(String::as_str).collect()
}

#[test]
fn diamond_two_shortest() {
    let graph = common::topologies::diamond();
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"D".to_string(), 2);

    assert_eq!(paths.len(), 2);
    assert_eq!(hops(&paths[0]), ["A", "B", "D"]);
    assert_eq!(paths[0].cost, 3.0);
    assert_eq!(hops(&paths[1]), ["A", "C", "D"]);
    assert_eq!(paths[1].cost, 5.0);
}

#[test]
fn k_exceeds_path_count() {
    let graph = common::topologies::diamond();
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"D".to_string(), 10);

    // only two simple paths exist in the diamond
    assert_eq!(paths.len(), 2);
}

#[test]
fn equal_cost_tie_break_is_stable() {
    let graph = common::topologies::square();
    // both paths cost 2; the one through B is expanded first because the
    // A<->B link sorts before A<->C
    for _ in 0..10 {
        let paths = KShortest.find_paths(&graph, &"A".to_string(), &"D".to_string(), 2);
        assert_eq!(hops(&paths[0]), ["A", "B", "D"]);
        assert_eq!(hops(&paths[1]), ["A", "C", "D"]);
    }
}

#[test]
fn disconnected_returns_empty() {
    let graph = common::topologies::split_components();
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"C".to_string(), 2);

    assert!(paths.is_empty());
}

#[test]
fn unknown_endpoint_returns_empty() {
    let graph = common::topologies::single_link();
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"Z".to_string(), 2);

    assert!(paths.is_empty());
}

#[test]
fn source_equals_destination_yields_trivial_path() {
    let graph = common::topologies::single_link();
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"A".to_string(), 2);

    assert_eq!(paths.len(), 1);
    assert_eq!(hops(&paths[0]), ["A"]);
    assert_eq!(paths[0].cost, 0.0);
    assert!(paths[0].is_empty());
}

#[test]
fn longer_hop_path_can_outrank_direct_link() {
    let graph = build_graph(
        &["A", "B", "C"],
        &[("A", "C", 10.0), ("A", "B", 1.0), ("B", "C", 1.0)],
    );
    let paths = KShortest.find_paths(&graph, &"A".to_string(), &"C".to_string(), 2);

    assert_eq!(hops(&paths[0]), ["A", "B", "C"]);
    assert_eq!(paths[0].cost, 2.0);
    assert_eq!(hops(&paths[1]), ["A", "C"]);
    assert_eq!(paths[1].cost, 10.0);
}
