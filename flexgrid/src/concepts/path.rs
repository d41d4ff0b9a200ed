use std::fmt::{Display, Formatter};

use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::framework::RsaSystem;

/// An ordered hop sequence from source to destination. Consecutive hops must
/// correspond to a link in the graph; `Graph::resolve_links` enforces this.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct NodePath<T: RsaSystem + ?Sized> {
    pub hops: Vec<T::NodeId>,
    /// sum of the traversed link lengths
    pub cost: f64,
}

impl<T: RsaSystem + ?Sized> NodePath<T> {
    /// The zero-cost path from a node to itself. Traverses no links.
    pub fn trivial(at: T::NodeId) -> Self {
        NodePath {
            hops: vec![at],
            cost: 0.0,
        }
    }

    /// Number of links the path traverses.
    pub fn len(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: RsaSystem + ?Sized> Display for NodePath<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{hop}")?;
        }
        Ok(())
    }
}
