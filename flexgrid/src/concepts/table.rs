use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::ops::Range;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::concepts::graph::{Graph, LinkKey};
use crate::framework::RsaSystem;

/// Free-slot view of one link on a candidate path. Derived per allocation
/// attempt, never stored.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub struct AvailableSlots<T: RsaSystem + ?Sized> {
    pub link: LinkKey<T>,
    /// ascending free slot indices
    pub free: Vec<usize>,
}

/// Per-link spectrum occupancy: one row per physical link, one cell per
/// frequency slot, each cell either free or holding the id of the demand
/// occupying it. Created once with all slots free, grows monotonically,
/// lives for the whole run.
#[serde_as]
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()))]
#[serde(bound = "")]
pub struct SpectrumTable<T: RsaSystem + ?Sized> {
    #[serde_as(as = "Vec<(_, _)>")]
    rows: BTreeMap<LinkKey<T>, Vec<Option<T::DemandId>>>,
}

impl<T: RsaSystem> SpectrumTable<T> {
    /// One row per graph link; row length is the link's own capacity or
    /// `default_capacity` when the link does not carry one.
    pub fn new(graph: &Graph<T>, default_capacity: usize) -> Self {
        let rows = graph
            .links()
            .map(|(key, link)| {
                let capacity = link.capacity.unwrap_or(default_capacity);
                (key.clone(), vec![None; capacity])
            })
            .collect();
        SpectrumTable { rows }
    }

    /// Ascending indices of the currently free slots on `link`. Unknown
    /// links have no slots.
    pub fn free_slots(&self, link: &LinkKey<T>) -> Vec<usize> {
        self.rows
            .get(link)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_none())
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Occupancy row of `link`, one cell per slot.
    pub fn slots(&self, link: &LinkKey<T>) -> Option<&[Option<T::DemandId>]> {
        self.rows.get(link).map(Vec::as_slice)
    }

    pub fn capacity_of(&self, link: &LinkKey<T>) -> usize {
        self.rows.get(link).map(Vec::len).unwrap_or(0)
    }

    pub fn links(&self) -> impl Iterator<Item = &LinkKey<T>> {
        self.rows.keys()
    }

    /// Total number of occupied slots across all links.
    pub fn occupied(&self) -> usize {
        self.rows
            .values()
            .map(|row| row.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Marks every slot in `slots` as occupied by `demand` on every link in
    /// `links`.
    ///
    /// Every targeted slot must exist and be free; anything else is a bug in
    /// the calling strategy and panics before the table is touched, since a
    /// silently double-booked slot would corrupt every later allocation.
    pub fn reserve(&mut self, links: &[LinkKey<T>], slots: Range<usize>, demand: &T::DemandId) {
        for link in links {
            let row = self
                .rows
                .get(link)
                .unwrap_or_else(|| panic!("reserve on unknown link {link}"));
            assert!(
                slots.end <= row.len(),
                "slot range {slots:?} out of bounds on {link} (capacity {})",
                row.len()
            );
            for i in slots.clone() {
                assert!(
                    row[i].is_none(),
                    "slot {i} on {link} is already occupied, refusing to double-book"
                );
            }
        }
        for link in links {
            if let Some(row) = self.rows.get_mut(link) {
                for i in slots.clone() {
                    row[i] = Some(demand.clone());
                }
            }
        }
    }

    /// Human-readable links-by-slots snapshot. Read-only.
    pub fn render(&self) -> String {
        let label_width = self
            .rows
            .keys()
            .map(|key| key.to_string().len())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for (key, row) in &self.rows {
            let _ = write!(out, "{:<label_width$} |", key.to_string());
            for slot in row {
                match slot {
                    Some(id) => {
                        let _ = write!(out, " {:>3}", id.to_string());
                    }
                    None => {
                        let _ = write!(out, "   .");
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
