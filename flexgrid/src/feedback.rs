use educe::Educe;
use thiserror::Error;

use crate::framework::RsaSystem;

/// Fatal input and contract failures. A blocked demand is a normal outcome
/// and never appears here; everything below aborts the run.
#[derive(Error, Educe)]
#[educe(Debug(bound()))]
pub enum RsaError<T: RsaSystem + ?Sized> {
    /// Consecutive hops of a path have no corresponding link. Either the
    /// topology input is malformed or a path searcher produced a hop
    /// sequence that does not exist in the graph.
    #[error("no link between {from} and {to}")]
    MissingLink { from: T::NodeId, to: T::NodeId },
    #[error("duplicate node id {id}")]
    DuplicateNode { id: T::NodeId },
    /// Two input rows describe the same unordered endpoint pair, which
    /// would silently merge two physical links into one spectrum row.
    #[error("duplicate link {from}<->{to}")]
    DuplicateLink { from: T::NodeId, to: T::NodeId },
    #[error("link {from}<->{to} references an unknown node")]
    UnknownEndpoint { from: T::NodeId, to: T::NodeId },
    #[error("link {from}<->{to} has non-positive length {length}")]
    InvalidLength {
        from: T::NodeId,
        to: T::NodeId,
        length: f64,
    },
    #[error("link {from}<->{to} has zero capacity")]
    InvalidCapacity { from: T::NodeId, to: T::NodeId },
    /// A demand asked for zero slots. An empty reservation would count as
    /// supplied without occupying anything, so it is rejected up front.
    #[error("demand {id} requests zero slots")]
    InvalidWidth { id: T::DemandId },
}
