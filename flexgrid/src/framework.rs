use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Range;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::concepts::demand::Demand;
use crate::concepts::graph::{Graph, LinkKey};
use crate::concepts::path::NodePath;
use crate::concepts::table::{AvailableSlots, SpectrumTable};

pub trait RsaSystem {
    /// Identity of a node in the topology, MUST be unique within a run
    type NodeId: Ord + PartialOrd + RsaData + RsaKey + Debug + Display;
    /// Marker stored in occupied spectrum slots, identifies the owning demand
    type DemandId: RsaData + RsaKey + Debug + Display;
    /// Strategy that proposes ranked candidate paths between two nodes
    type PathSearch: PathSearch<Self> + Default;
    /// Strategy that commits a demand onto the spectrum table
    type TableFill: TableFill<Self> + Default;
    fn params() -> RsaParams {
        Default::default()
    }
}

pub trait RsaData: Clone + Serialize + DeserializeOwned + Sized {}
pub trait RsaKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> RsaKey for T {}
impl<T: Clone + Serialize + DeserializeOwned + Sized> RsaData for T {}

/// Path discovery capability. Implementations must be deterministic:
/// the same graph and endpoints always yield the same ranked list.
pub trait PathSearch<T: RsaSystem + ?Sized> {
    /// Returns up to `k` loop-free paths from `from` to `to`, ascending by
    /// total link length. An empty list means the endpoints are disconnected
    /// (or unknown), which callers report as a blocked demand, not a fault.
    fn find_paths(
        &self,
        graph: &Graph<T>,
        from: &T::NodeId,
        to: &T::NodeId,
        k: usize,
    ) -> Vec<NodePath<T>>;
}

/// Slot assignment capability. Given the free-slot views of one candidate
/// path, an implementation either commits the demand to the table and returns
/// the reserved slot range, or returns None and leaves the table untouched.
pub trait TableFill<T: RsaSystem + ?Sized> {
    fn fill(
        &self,
        table: &mut SpectrumTable<T>,
        demand: &Demand<T>,
        links: &[LinkKey<T>],
        free: &[AvailableSlots<T>],
    ) -> Option<Range<usize>>;
}

/// Run parameters
pub struct RsaParams {
    /// number of candidate paths requested per demand (K)
    pub candidate_paths: usize,
    /// slots provisioned on links that do not carry their own capacity
    pub default_capacity: usize,
}
impl Default for RsaParams {
    fn default() -> Self {
        Self {
            candidate_paths: 2,
            default_capacity: 40,
        }
    }
}
