mod input;

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{anyhow, bail, Context};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use flexgrid::concepts::graph::{Graph, Link, Node};
use flexgrid::engine::Allocator;
use flexgrid::fill::FirstFit;
use flexgrid::framework::{RsaParams, RsaSystem};
use flexgrid::search::KShortest;
use flexgrid::workload::RandomWorkload;

struct SimNet;

impl RsaSystem for SimNet {
    type NodeId = String;
    type DemandId = u32;
    type PathSearch = KShortest;
    type TableFill = FirstFit;
}

struct Args {
    nodes_path: PathBuf,
    links_path: PathBuf,
    slots: usize,
    paths: usize,
    demands: usize,
    seed: u64,
    out: PathBuf,
}

const USAGE: &str = "usage: spectrum-sim <nodes.csv> <links.csv> \
    [--slots N] [--paths K] [--demands N] [--seed N] [--out DIR]";

fn parse_args() -> anyhow::Result<Args> {
    let mut positional = Vec::new();
    let mut slots = 40;
    let mut paths = 2;
    let mut demands = 100;
    let mut seed = 0;
    let mut out = PathBuf::from("output");

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        let mut value = |name: &str| {
            argv.next()
                .ok_or_else(|| anyhow!("{name} expects a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--slots" => slots = value("--slots")?.parse().context("bad --slots")?,
            "--paths" => paths = value("--paths")?.parse().context("bad --paths")?,
            "--demands" => demands = value("--demands")?.parse().context("bad --demands")?,
            "--seed" => seed = value("--seed")?.parse().context("bad --seed")?,
            "--out" => out = PathBuf::from(value("--out")?),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ => positional.push(PathBuf::from(arg)),
        }
    }
    if positional.len() != 2 {
        bail!("{USAGE}");
    }
    if slots == 0 || paths == 0 {
        bail!("--slots and --paths must be at least 1");
    }
    let links_path = positional.pop().unwrap_or_default();
    let nodes_path = positional.pop().unwrap_or_default();
    Ok(Args {
        nodes_path,
        links_path,
        slots,
        paths,
        demands,
        seed,
        out,
    })
}

fn dump<S: serde::Serialize>(dir: &PathBuf, name: &str, value: &S) -> anyhow::Result<()> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    info!("starting routing and spectrum allocation");
    info!("nodes path: {:?}", args.nodes_path);
    info!("links path: {:?}", args.links_path);

    let node_ids = input::read_nodes(&args.nodes_path)?;
    let link_rows = input::read_links(&args.links_path)?;
    for row in &link_rows {
        debug!(
            "read link {}<->{} length {} designation {:?}",
            row.from, row.to, row.length, row.designation
        );
    }

    let nodes = node_ids
        .into_iter()
        .map(|id| Node::<SimNet> { id })
        .collect();
    let links = link_rows
        .iter()
        .map(|row| Link::<SimNet> {
            from: row.from.clone(),
            to: row.to.clone(),
            length: row.length,
            capacity: row.capacity,
        })
        .collect();
    let graph = Graph::new(nodes, links).map_err(|e| anyhow!("malformed topology: {e}"))?;
    info!(
        "topology loaded, {} nodes and {} links",
        graph.node_count(),
        graph.link_count()
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create output dir {}", args.out.display()))?;
    dump(&args.out, "graph.json", &graph)?;
    dump(&args.out, "links.json", &link_rows)?;

    let demands: Vec<_> =
        RandomWorkload::<SimNet>::new(&graph, args.slots, args.demands, args.seed).collect();
    dump(&args.out, "demands.json", &demands)?;

    let mut allocator = Allocator::<SimNet>::with_params(
        graph,
        RsaParams {
            candidate_paths: args.paths,
            default_capacity: args.slots,
        },
    );
    let summary = allocator
        .process_all(demands)
        .map_err(|e| anyhow!("allocation aborted: {e}"))?;

    info!("finished");
    info!(
        "total demands: {}, supplied: {}, blocked: {}",
        summary.total, summary.supplied, summary.blocked
    );
    info!("final spectrum table:\n{}", allocator.table.render());

    dump(&args.out, "outcomes.json", &allocator.drain_outcomes())?;
    dump(&args.out, "summary.json", &summary)?;
    dump(&args.out, "table.json", &allocator.table)?;
    let table_txt = args.out.join("table.txt");
    fs::write(&table_txt, allocator.table.render())
        .with_context(|| format!("cannot write {}", table_txt.display()))?;

    Ok(())
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e:#}");
            exit(2);
        }
    };
    if let Err(e) = run(args) {
        log::error!("{e:#}");
        exit(1);
    }
}
