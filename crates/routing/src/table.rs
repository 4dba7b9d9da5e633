//! Routing-table output types.

use indexmap::IndexMap;
use routesim_types::{Cost, NodeId};
use serde::Serialize;

/// One node's view of the network: destination id to best known cost.
///
/// Distance-vector tables omit the node's own id and any unreachable
/// destination; link-state tables carry an entry for every node,
/// including the source itself (zero) and unreachable ones
/// ([`Cost::INFINITY`]).
pub type RoutingTable = IndexMap<NodeId, Cost>;

/// Routing tables for every node in the topology, in node order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoutingTables {
    tables: IndexMap<NodeId, RoutingTable>,
}

impl RoutingTables {
    /// Create an empty table set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table for a node, replacing any previous one.
    pub fn insert(&mut self, node: NodeId, table: RoutingTable) {
        self.tables.insert(node, table);
    }

    /// The table computed for a node, if present.
    pub fn table(&self, node: &NodeId) -> Option<&RoutingTable> {
        self.tables.get(node)
    }

    /// Mutable access to a node's table.
    pub(crate) fn table_mut(&mut self, node: &NodeId) -> Option<&mut RoutingTable> {
        self.tables.get_mut(node)
    }

    /// The best known cost from `node` to `dest`, if the table has one.
    pub fn cost(&self, node: &NodeId, dest: &NodeId) -> Option<Cost> {
        self.tables.get(node).and_then(|t| t.get(dest)).copied()
    }

    /// Iterate over (node, table) pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &RoutingTable)> {
        self.tables.iter()
    }

    /// Number of per-node tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no tables have been computed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a RoutingTables {
    type Item = (&'a NodeId, &'a RoutingTable);
    type IntoIter = indexmap::map::Iter<'a, NodeId, RoutingTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
