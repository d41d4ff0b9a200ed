use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::concepts::path::NodePath;
use crate::feedback::RsaError;
use crate::framework::RsaSystem;

#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct Node<T: RsaSystem + ?Sized> {
    pub id: T::NodeId,
}

#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct Link<T: RsaSystem + ?Sized> {
    pub from: T::NodeId,
    pub to: T::NodeId,
    /// physical length of the link, used as the path cost
    pub length: f64,
    /// slot count of this link; falls back to `RsaParams::default_capacity` when None
    pub capacity: Option<usize>,
}

/// Canonical identifier of a link: the unordered endpoint pair, normalized so
/// the smaller endpoint comes first. Both directions of a physical link share
/// one spectrum row, so `a<->b` and `b<->a` address the same resource.
#[derive(Educe, Serialize, Deserialize)]
#[educe(
    Clone(bound()),
    Debug(bound()),
    PartialEq(bound()),
    Eq,
    PartialOrd,
    Ord(bound()),
    Hash(bound())
)]
#[serde(bound = "")]
pub struct LinkKey<T: RsaSystem + ?Sized>(pub T::NodeId, pub T::NodeId);

impl<T: RsaSystem + ?Sized> LinkKey<T> {
    pub fn new(a: T::NodeId, b: T::NodeId) -> Self {
        if b < a {
            LinkKey(b, a)
        } else {
            LinkKey(a, b)
        }
    }
}

impl<T: RsaSystem + ?Sized> Display for LinkKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<->{}", self.0, self.1)
    }
}

/// Immutable-after-construction topology: nodes, undirected weighted links,
/// and the adjacency derived from them. All maps are ordered so traversal
/// order (and therefore everything downstream) is deterministic.
#[serde_as]
#[derive(Educe, Serialize)]
#[educe(Clone(bound()))]
#[serde(bound = "")]
pub struct Graph<T: RsaSystem + ?Sized> {
    nodes: BTreeMap<T::NodeId, Node<T>>,
    #[serde_as(as = "Vec<(_, _)>")]
    links: BTreeMap<LinkKey<T>, Link<T>>,
    #[serde(skip)]
    adj: BTreeMap<T::NodeId, Vec<(T::NodeId, f64)>>,
}

impl<T: RsaSystem> Graph<T> {
    /// Builds and validates the topology. Malformed input fails the whole
    /// run here, before any allocation begins.
    pub fn new(nodes: Vec<Node<T>>, links: Vec<Link<T>>) -> Result<Self, RsaError<T>> {
        let mut node_map: BTreeMap<T::NodeId, Node<T>> = BTreeMap::new();
        for node in nodes {
            if node_map.contains_key(&node.id) {
                return Err(RsaError::DuplicateNode { id: node.id });
            }
            node_map.insert(node.id.clone(), node);
        }
        let mut link_map: BTreeMap<LinkKey<T>, Link<T>> = BTreeMap::new();
        for link in links {
            if !node_map.contains_key(&link.from) || !node_map.contains_key(&link.to) {
                return Err(RsaError::UnknownEndpoint {
                    from: link.from,
                    to: link.to,
                });
            }
            if !(link.length > 0.0) {
                return Err(RsaError::InvalidLength {
                    from: link.from,
                    to: link.to,
                    length: link.length,
                });
            }
            if link.capacity == Some(0) {
                return Err(RsaError::InvalidCapacity {
                    from: link.from,
                    to: link.to,
                });
            }
            let key = LinkKey::new(link.from.clone(), link.to.clone());
            if link_map.contains_key(&key) {
                return Err(RsaError::DuplicateLink {
                    from: link.from,
                    to: link.to,
                });
            }
            link_map.insert(key, link);
        }
        let mut adj: BTreeMap<T::NodeId, Vec<(T::NodeId, f64)>> = BTreeMap::new();
        for link in link_map.values() {
            adj.entry(link.from.clone())
                .or_default()
                .push((link.to.clone(), link.length));
            adj.entry(link.to.clone())
                .or_default()
                .push((link.from.clone(), link.length));
        }
        Ok(Graph {
            nodes: node_map,
            links: link_map,
            adj,
        })
    }

    pub fn contains_node(&self, id: &T::NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &T::NodeId> {
        self.nodes.keys()
    }

    pub fn link(&self, key: &LinkKey<T>) -> Option<&Link<T>> {
        self.links.get(key)
    }

    pub fn links(&self) -> impl Iterator<Item = (&LinkKey<T>, &Link<T>)> {
        self.links.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Neighbours of `id` with the length of the connecting link, in the
    /// deterministic order the links were registered.
    pub fn neighbours(&self, id: &T::NodeId) -> &[(T::NodeId, f64)] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves a hop sequence into the canonical keys of the traversed
    /// links. A consecutive pair with no corresponding link is malformed
    /// input or a searcher bug, never a normal runtime condition.
    pub fn resolve_links(&self, path: &NodePath<T>) -> Result<Vec<LinkKey<T>>, RsaError<T>> {
        let mut keys = Vec::with_capacity(path.hops.len().saturating_sub(1));
        for pair in path.hops.windows(2) {
            let key = LinkKey::new(pair[0].clone(), pair[1].clone());
            if !self.links.contains_key(&key) {
                return Err(RsaError::MissingLink {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                });
            }
            keys.push(key);
        }
        Ok(keys)
    }
}
