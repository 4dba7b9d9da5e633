//! Configuration types for the simulator.

use routesim_types::{Cost, NodeId, Topology, TopologyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which routing algorithm the next simulation step runs.
///
/// Selecting a type never triggers computation by itself; it only
/// determines which engine [`Simulator::step`] dispatches to.
///
/// [`Simulator::step`]: crate::Simulator::step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingType {
    /// Iterative Bellman-Ford relaxation using neighbors' tables.
    #[default]
    DistanceVector,

    /// Per-source Dijkstra over the full topology.
    LinkState,
}

impl fmt::Display for RoutingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingType::DistanceVector => write!(f, "distance-vector"),
            RoutingType::LinkState => write!(f, "link-state"),
        }
    }
}

/// One symmetric weighted link in a [`TopologySpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: Cost,
}

/// A declarative topology: node labels plus the links between them.
///
/// Specs are plain data, cheap to clone and serialize; [`build`] turns
/// one into a live [`Topology`] for the driver to own.
///
/// [`build`]: TopologySpec::build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySpec {
    nodes: Vec<NodeId>,
    links: Vec<LinkSpec>,
}

impl TopologySpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic four-node demo: a line A--B(1)--C(1)--D(1) plus a
    /// direct A--D link of cost 4, so the three-hop path beats the
    /// direct one.
    pub fn classic_demo() -> Self {
        Self::new()
            .with_nodes(["A", "B", "C", "D"])
            .with_link("A", "B", Cost::new(1))
            .with_link("B", "C", Cost::new(1))
            .with_link("C", "D", Cost::new(1))
            .with_link("A", "D", Cost::new(4))
    }

    /// Add a node.
    pub fn with_node(mut self, id: impl Into<NodeId>) -> Self {
        self.nodes.push(id.into());
        self
    }

    /// Add several nodes.
    pub fn with_nodes<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeId>,
    {
        self.nodes.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add a symmetric link.
    pub fn with_link(
        mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        cost: Cost,
    ) -> Self {
        self.links.push(LinkSpec {
            a: a.into(),
            b: b.into(),
            cost,
        });
        self
    }

    /// Node labels in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Links in declaration order.
    pub fn links(&self) -> &[LinkSpec] {
        &self.links
    }

    /// Materialize the spec into a topology.
    ///
    /// Fails if any link references a node the spec never declared.
    pub fn build(&self) -> Result<Topology, TopologyError> {
        let mut topology = Topology::new();
        for id in &self.nodes {
            topology.add_node(id.clone());
        }
        for link in &self.links {
            topology.add_link(&link.a, &link.b, link.cost)?;
        }
        Ok(topology)
    }
}
