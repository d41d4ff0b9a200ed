use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;

/// One row of the links CSV, including the pass-through metadata columns the
/// core does not care about. Schema, header row first:
/// `From,To,Length,Capacity,Cost,Designation,Delay`; everything after
/// `Capacity` is optional.
#[derive(Clone, Debug, Serialize)]
pub struct LinkRow {
    pub from: String,
    pub to: String,
    pub length: f64,
    /// blank means "use the global slot count"
    pub capacity: Option<usize>,
    pub designation: Option<String>,
}

/// Node ids from a CSV whose first column is `Id`. The header row is skipped.
pub fn read_nodes(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read nodes file {}", path.display()))?;
    let mut nodes = Vec::new();
    for (lineno, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let id = line.split(',').next().unwrap_or("").trim();
        if id.is_empty() {
            bail!("{}:{}: empty node id", path.display(), lineno + 1);
        }
        nodes.push(id.to_string());
    }
    Ok(nodes)
}

pub fn read_links(path: &Path) -> anyhow::Result<Vec<LinkRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read links file {}", path.display()))?;
    let mut links = Vec::new();
    for (lineno, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        links.push(
            parse_link_row(line)
                .with_context(|| format!("{}:{}: bad link row", path.display(), lineno + 1))?,
        );
    }
    Ok(links)
}

fn parse_link_row(line: &str) -> anyhow::Result<LinkRow> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        bail!("expected at least From,To,Length, got {} fields", fields.len());
    }
    let length: f64 = fields[2]
        .parse()
        .with_context(|| format!("bad length {:?}", fields[2]))?;
    let capacity = match fields.get(3).copied().unwrap_or("") {
        "" => None,
        raw => Some(
            raw.parse()
                .with_context(|| format!("bad capacity {raw:?}"))?,
        ),
    };
    let designation = fields
        .get(5)
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.to_string());
    Ok(LinkRow {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
        length,
        capacity,
        designation,
    })
}
