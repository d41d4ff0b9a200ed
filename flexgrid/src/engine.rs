use std::ops::Range;

use educe::Educe;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::concepts::demand::Demand;
use crate::concepts::graph::Graph;
use crate::concepts::path::NodePath;
use crate::concepts::table::{AvailableSlots, SpectrumTable};
use crate::feedback::RsaError;
use crate::framework::{PathSearch, RsaParams, RsaSystem, TableFill};

/// Result of processing one demand. Pushed onto the engine's outcome queue
/// for whatever sink the caller wires up (console, file, test assertion).
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct Outcome<T: RsaSystem + ?Sized> {
    pub demand: Demand<T>,
    pub supplied: bool,
    /// chosen path, present iff supplied
    pub path: Option<NodePath<T>>,
    /// reserved slot range, present iff supplied and the path has links
    pub slots: Option<Range<usize>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub supplied: usize,
    pub blocked: usize,
}

/// The allocation engine. Owns the topology, the spectrum table and the two
/// injected strategies, and consumes demands strictly in arrival order, each
/// against the table state left by all earlier demands. Greedy and online:
/// no batching, no reordering, no preemption.
pub struct Allocator<T: RsaSystem + ?Sized> {
    pub graph: Graph<T>,
    pub table: SpectrumTable<T>,
    /// outcome event per processed demand, in order; drain from the outside
    pub outcomes: Vec<Outcome<T>>,
    pub supplied: usize,
    pub blocked: usize,
    params: RsaParams,
    searcher: T::PathSearch,
    fill: T::TableFill,
}

impl<T: RsaSystem> Allocator<T> {
    pub fn new(graph: Graph<T>) -> Self {
        Self::with_params(graph, T::params())
    }

    pub fn with_params(graph: Graph<T>, params: RsaParams) -> Self {
        let table = SpectrumTable::new(&graph, params.default_capacity);
        Allocator {
            graph,
            table,
            outcomes: Vec::new(),
            supplied: 0,
            blocked: 0,
            params,
            searcher: Default::default(),
            fill: Default::default(),
        }
    }

    /// Processes one demand to completion. Returns whether it was supplied;
    /// the full outcome is appended to the queue either way. Errors are
    /// reserved for malformed input (a zero-width demand, a path whose hops
    /// have no link) and abort the run.
    pub fn process(&mut self, demand: Demand<T>) -> Result<bool, RsaError<T>> {
        if demand.slots == 0 {
            return Err(RsaError::InvalidWidth { id: demand.id });
        }
        info!(
            "processing demand {} from {} to {} with {} slots",
            demand.id, demand.from, demand.to, demand.slots
        );

        let paths = self.searcher.find_paths(
            &self.graph,
            &demand.from,
            &demand.to,
            self.params.candidate_paths,
        );

        if paths.is_empty() {
            if !self.graph.contains_node(&demand.from) || !self.graph.contains_node(&demand.to) {
                warn!(
                    "demand {} names an unknown node, {} or {}",
                    json!(demand.id),
                    json!(demand.from),
                    json!(demand.to)
                );
            } else {
                info!("path from {} to {} not found", demand.from, demand.to);
            }
            return Ok(self.record(demand, false, None, None));
        }

        for path in paths {
            debug!("trying path: {path}");
            let links = self.graph.resolve_links(&path)?;

            if links.is_empty() {
                // source equals destination, nothing to reserve
                return Ok(self.record(demand, true, Some(path), None));
            }

            let free: Vec<AvailableSlots<T>> = links
                .iter()
                .map(|link| AvailableSlots {
                    link: link.clone(),
                    free: self.table.free_slots(link),
                })
                .collect();

            if let Some(run) = self.fill.fill(&mut self.table, &demand, &links, &free) {
                info!("demand {} supplied on {path} at slots {run:?}", demand.id);
                debug!("table after supply:\n{}", self.table.render());
                return Ok(self.record(demand, true, Some(path), Some(run)));
            }
        }

        info!(
            "it is not possible to supply demand of {} slots from {} to {}",
            demand.slots, demand.from, demand.to
        );
        Ok(self.record(demand, false, None, None))
    }

    /// Drains an ordered demand source, stopping only on a fatal error.
    pub fn process_all(
        &mut self,
        demands: impl IntoIterator<Item = Demand<T>>,
    ) -> Result<Summary, RsaError<T>> {
        for demand in demands {
            self.process(demand)?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.supplied + self.blocked,
            supplied: self.supplied,
            blocked: self.blocked,
        }
    }

    /// Removes and returns the queued outcome events, oldest first.
    pub fn drain_outcomes(&mut self) -> Vec<Outcome<T>> {
        self.outcomes.drain(..).collect()
    }

    fn record(
        &mut self,
        demand: Demand<T>,
        supplied: bool,
        path: Option<NodePath<T>>,
        slots: Option<Range<usize>>,
    ) -> bool {
        if supplied {
            self.supplied += 1;
        } else {
            self.blocked += 1;
        }
        self.outcomes.push(Outcome {
            demand,
            supplied,
            path,
            slots,
        });
        supplied
    }
}
