use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::framework::RsaSystem;

/// One bandwidth request: connect `from` to `to` with `slots` contiguous
/// frequency slots. Created once, consumed exactly once by the allocation
/// engine; the outcome (supplied or blocked) lives in the engine's log,
/// not here.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct Demand<T: RsaSystem + ?Sized> {
    pub id: T::DemandId,
    pub from: T::NodeId,
    pub to: T::NodeId,
    /// requested slot width, at least 1; the engine rejects 0
    pub slots: usize,
}
