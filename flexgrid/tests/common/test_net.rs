use flexgrid::concepts::demand::Demand;
use flexgrid::concepts::graph::{Graph, Link, LinkKey, Node};
use flexgrid::engine::Allocator;
use flexgrid::fill::FirstFit;
use flexgrid::framework::{RsaParams, RsaSystem};
use flexgrid::search::KShortest;

pub struct TestNet;

impl RsaSystem for TestNet {
    type NodeId = String;
    type DemandId = u32;
    type PathSearch = KShortest;
    type TableFill = FirstFit;
}

/// Builds a graph from node-id and (from, to, length) literal lists; every
/// link takes its capacity from the allocator parameters.
pub fn build_graph(nodes: &[&str], links: &[(&str, &str, f64)]) -> Graph<TestNet> {
    let edges: Vec<(&str, &str, f64, Option<usize>)> =
        links.iter().map(|&(a, b, l)| (a, b, l, None)).collect();
    build_graph_caps(nodes, &edges)
}

pub fn build_graph_caps(
    nodes: &[&str],
    links: &[(&str, &str, f64, Option<usize>)],
) -> Graph<TestNet> {
    let nodes = nodes
        .iter()
        .map(|id| Node { id: id.to_string() })
        .collect();
    let links = links
        .iter()
        .map(|&(from, to, length, capacity)| Link {
            from: from.to_string(),
            to: to.to_string(),
            length,
            capacity,
        })
        .collect();
    Graph::new(nodes, links).unwrap()
}

pub fn demand(id: u32, from: &str, to: &str, slots: usize) -> Demand<TestNet> {
    Demand {
        id,
        from: from.to_string(),
        to: to.to_string(),
        slots,
    }
}

/// Allocator with K candidate paths and a uniform slot count per link.
pub fn allocator(graph: Graph<TestNet>, k: usize, slots: usize) -> Allocator<TestNet> {
    Allocator::with_params(
        graph,
        RsaParams {
            candidate_paths: k,
            default_capacity: slots,
        },
    )
}

pub fn key(a: &str, b: &str) -> LinkKey<TestNet> {
    LinkKey::new(a.to_string(), b.to_string())
}

/// JSON snapshot of the table, used to compare whole runs byte for byte.
pub fn freeze(alloc: &Allocator<TestNet>) -> String {
    serde_json::to_string(&alloc.table).unwrap()
}
