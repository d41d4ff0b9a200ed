use std::ops::Range;

use crate::concepts::demand::Demand;
use crate::concepts::graph::LinkKey;
use crate::concepts::table::{AvailableSlots, SpectrumTable};
use crate::framework::{RsaSystem, TableFill};
use crate::util::first_run;

/// First-fit slot assignment: a slot offset is eligible only if free on
/// every link of the path (spectrum continuity), and the lowest eligible
/// run of `demand.slots` consecutive indices wins (spectrum contiguity).
/// No run means the path cannot carry the demand and the table is left
/// untouched.
#[derive(Default)]
pub struct FirstFit;

impl<T: RsaSystem> TableFill<T> for FirstFit {
    fn fill(
        &self,
        table: &mut SpectrumTable<T>,
        demand: &Demand<T>,
        links: &[LinkKey<T>],
        free: &[AvailableSlots<T>],
    ) -> Option<Range<usize>> {
        let (head, rest) = free.split_first()?;
        let mut eligible = head.free.clone();
        for view in rest {
            // views are ascending, intersect by binary search
            eligible.retain(|slot| view.free.binary_search(slot).is_ok());
        }
        let run = first_run(&eligible, demand.slots)?;
        table.reserve(links, run.clone(), &demand.id);
        Some(run)
    }
}
