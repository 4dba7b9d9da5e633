//! Routing Simulator
//!
//! The driver layer over the routing engines: it owns one topology,
//! tracks which algorithm is selected, counts iterations, and recomputes
//! routing tables on demand.
//!
//! # Example
//!
//! ```
//! use routesim_simulator::{RoutingType, Simulator, TopologySpec};
//!
//! let mut sim = Simulator::new(&TopologySpec::classic_demo()).unwrap();
//!
//! sim.set_routing_type(RoutingType::LinkState);
//! let tables = sim.step();
//! assert!(tables.cost(&"A".into(), &"D".into()).is_some());
//!
//! sim.poison_route(&"A".into(), &"D".into()).unwrap();
//! sim.step();
//! assert_eq!(sim.iteration(), 3);
//! ```

pub mod config;
pub mod report;
pub mod runner;
pub mod workload;

pub use config::{LinkSpec, RoutingType, TopologySpec};
pub use report::render_tables;
pub use routesim_routing::{RoutingTable, RoutingTables};
pub use runner::Simulator;
pub use workload::{generate_topology, RandomTopologyConfig};
