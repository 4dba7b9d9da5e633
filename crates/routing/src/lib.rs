//! Routing engines for the simulator.
//!
//! Two classic shortest-path algorithms over the same [`Topology`]:
//!
//! - **Distance-vector** ([`run_distance_vector`]): iterative
//!   Bellman-Ford relaxation in which each node improves its table using
//!   only its neighbors' current tables.
//! - **Link-state** ([`run_link_state`]): per-source Dijkstra over the
//!   full topology, linear minimum scan rather than a priority queue.
//!
//! Both engines are pure functions of the topology: they never mutate
//! it, never fail, and repeated runs over an unchanged topology produce
//! identical tables.
//!
//! [`Topology`]: routesim_types::Topology

mod distance_vector;
mod link_state;
mod table;

pub use distance_vector::run_distance_vector;
pub use link_state::run_link_state;
pub use table::{RoutingTable, RoutingTables};
