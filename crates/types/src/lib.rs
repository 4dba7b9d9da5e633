//! Core types for the routing simulator.
//!
//! This crate holds the building blocks shared by both routing engines:
//! node identifiers, link costs, and the [`Topology`] store that owns the
//! weighted, symmetric adjacency between nodes.

mod cost;
mod identifiers;
mod topology;

pub use cost::Cost;
pub use identifiers::NodeId;
pub use topology::{Node, Topology, TopologyError};
