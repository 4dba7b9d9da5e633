//! The topology store: nodes and the symmetric weighted links between them.

use crate::{Cost, NodeId};
use indexmap::IndexMap;
use serde::Serialize;

/// Errors from topology mutations.
///
/// Every mutating operation surfaces bad input instead of dropping the
/// operation silently, and a failed call never leaves a partial state
/// change behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Referenced a node id that is not registered in the topology.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// A link's endpoints must be distinct.
    #[error("node {0} cannot link to itself")]
    SelfLink(NodeId),

    /// Poison targets a pair of nodes with no direct link between them.
    #[error("no direct link between {0} and {1}")]
    LinkNotFound(NodeId, NodeId),
}

/// A single node and its direct links.
///
/// `distances` holds only direct link costs to immediate neighbors, never
/// computed shortest paths. The neighbor set is exactly the key set of
/// `distances`, and a node never carries an entry for itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
    distances: IndexMap<NodeId, Cost>,
}

impl Node {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            distances: IndexMap::new(),
        }
    }

    /// This node's id.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Direct link costs to immediate neighbors, in link insertion order.
    pub fn distances(&self) -> &IndexMap<NodeId, Cost> {
        &self.distances
    }

    /// Ids of the nodes this node shares a direct link with.
    pub fn neighbors(&self) -> impl Iterator<Item = &NodeId> {
        self.distances.keys()
    }

    /// The direct link cost to a neighbor, if one exists.
    pub fn distance_to(&self, neighbor: &NodeId) -> Option<Cost> {
        self.distances.get(neighbor).copied()
    }

    /// Number of direct links.
    pub fn degree(&self) -> usize {
        self.distances.len()
    }
}

/// The full node-id to node mapping with symmetric weighted links.
///
/// Nodes are stored in insertion order, which fixes the iteration order
/// both engines see (and thereby their tie-breaking). Every mutation
/// keeps the symmetry invariant: for any linked pair (a, b),
/// `a.distances[b] == b.distances[a]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topology {
    nodes: IndexMap<NodeId, Node>,
}

impl Topology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a topology with the given nodes registered and no links.
    pub fn with_nodes<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        let mut topology = Self::new();
        for id in ids {
            topology.add_node(id.into());
        }
        topology
    }

    /// Register a node with no links.
    ///
    /// Re-registering an existing id is a no-op: links already attached
    /// to the node are preserved.
    pub fn add_node(&mut self, id: NodeId) {
        self.nodes
            .entry(id.clone())
            .or_insert_with(|| Node::new(id));
    }

    /// Create or update the symmetric link between two registered nodes.
    ///
    /// Both directions are written in one call, so the symmetry invariant
    /// holds after every return. Re-linking an existing pair overwrites
    /// the cost. Zero and duplicate costs are permitted.
    pub fn add_link(&mut self, a: &NodeId, b: &NodeId, cost: Cost) -> Result<(), TopologyError> {
        if a == b {
            return Err(TopologyError::SelfLink(a.clone()));
        }
        self.require(a)?;
        self.require(b)?;
        self.set_symmetric(a, b, cost);
        Ok(())
    }

    /// Force both directions of an existing link to [`Cost::POISONED`].
    ///
    /// The neighbor relationship survives: the link still exists
    /// topologically, just at a maximal advertised cost, so both engines
    /// re-propagate the high cost on their next run.
    pub fn poison(&mut self, from: &NodeId, to: &NodeId) -> Result<(), TopologyError> {
        self.require(from)?;
        self.require(to)?;
        let linked = self
            .node(from)
            .is_some_and(|node| node.distances.contains_key(to));
        if !linked {
            return Err(TopologyError::LinkNotFound(from.clone(), to.clone()));
        }
        self.set_symmetric(from, to, Cost::POISONED);
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the topology has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node id is registered.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// The symmetric cost of the direct link between two nodes, if any.
    pub fn link_cost(&self, a: &NodeId, b: &NodeId) -> Option<Cost> {
        self.node(a).and_then(|node| node.distance_to(b))
    }

    fn require(&self, id: &NodeId) -> Result<(), TopologyError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(TopologyError::UnknownNode(id.clone()))
        }
    }

    // Callers have already validated both endpoints.
    fn set_symmetric(&mut self, a: &NodeId, b: &NodeId, cost: Cost) {
        if let Some(node) = self.nodes.get_mut(a) {
            node.distances.insert(b.clone(), cost);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.distances.insert(a.clone(), cost);
        }
    }
}
