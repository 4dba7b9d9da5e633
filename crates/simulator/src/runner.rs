//! The simulation driver.

use crate::config::{RoutingType, TopologySpec};
use routesim_routing::{run_distance_vector, run_link_state, RoutingTables};
use routesim_types::{Cost, NodeId, Topology, TopologyError};
use tracing::{debug, info};

/// Owns one simulation session: the current topology, the selected
/// routing algorithm, and the iteration counter.
///
/// All commands run to completion before the next is accepted; there is
/// no background computation and no shared state, so a `Simulator` is
/// single-owner by construction. Callers that need concurrent sessions
/// create one `Simulator` per session.
///
/// The iteration counter increases on every accepted poison or simulate
/// action. Routing tables are always recomputed in full from the current
/// topology, never patched across iterations, so stepping twice over an
/// unchanged topology yields identical tables.
#[derive(Debug, Clone)]
pub struct Simulator {
    topology: Topology,
    routing_type: RoutingType,
    iteration: u64,
    pending_poison: Option<(NodeId, NodeId)>,
    tables: Option<RoutingTables>,
    previous_tables: Option<RoutingTables>,
}

impl Simulator {
    /// Build a session from a declarative topology spec.
    pub fn new(spec: &TopologySpec) -> Result<Self, TopologyError> {
        let topology = spec.build()?;
        info!(nodes = topology.len(), "simulation session created");
        Ok(Self {
            topology,
            routing_type: RoutingType::default(),
            iteration: 0,
            pending_poison: None,
            tables: None,
            previous_tables: None,
        })
    }

    /// The current topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The currently selected routing algorithm.
    pub fn routing_type(&self) -> RoutingType {
        self.routing_type
    }

    /// Select which engine the next [`step`](Self::step) dispatches to.
    ///
    /// Does not trigger any computation.
    pub fn set_routing_type(&mut self, routing_type: RoutingType) {
        debug!(%routing_type, "routing type selected");
        self.routing_type = routing_type;
    }

    /// Number of accepted poison and simulate actions so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The tables produced by the most recent step, if any.
    pub fn routing_tables(&self) -> Option<&RoutingTables> {
        self.tables.as_ref()
    }

    /// Whether the last two steps produced identical tables.
    ///
    /// False until at least two steps have run.
    pub fn has_converged(&self) -> bool {
        match (&self.tables, &self.previous_tables) {
            (Some(current), Some(previous)) => current == previous,
            _ => false,
        }
    }

    /// Create or update a symmetric link in the current topology.
    ///
    /// Does not advance the iteration counter; only poison and simulate
    /// actions do.
    pub fn add_link(
        &mut self,
        a: &NodeId,
        b: &NodeId,
        cost: Cost,
    ) -> Result<(), TopologyError> {
        self.topology.add_link(a, b, cost)?;
        debug!(%a, %b, %cost, "link added");
        Ok(())
    }

    /// Poison the link between two nodes, advancing the iteration
    /// counter.
    ///
    /// Poisoning does not recompute tables; call [`step`](Self::step) to
    /// observe its effect.
    pub fn poison_route(&mut self, from: &NodeId, to: &NodeId) -> Result<(), TopologyError> {
        self.topology.poison(from, to)?;
        self.iteration += 1;
        info!(%from, %to, iteration = self.iteration, "route poisoned");
        Ok(())
    }

    /// Stage a poison pair without applying it.
    pub fn select_poison(&mut self, from: NodeId, to: NodeId) {
        self.pending_poison = Some((from, to));
    }

    /// The staged poison pair, if any.
    pub fn pending_poison(&self) -> Option<&(NodeId, NodeId)> {
        self.pending_poison.as_ref()
    }

    /// Apply the staged poison pair, if one is selected.
    ///
    /// Returns `Ok(false)` when nothing was staged. The selection is
    /// consumed either way once an application is attempted.
    pub fn apply_pending_poison(&mut self) -> Result<bool, TopologyError> {
        let Some((from, to)) = self.pending_poison.take() else {
            return Ok(false);
        };
        self.poison_route(&from, &to)?;
        Ok(true)
    }

    /// Run the selected engine over the current topology.
    ///
    /// Advances the iteration counter and returns the fresh tables.
    pub fn step(&mut self) -> &RoutingTables {
        let tables = match self.routing_type {
            RoutingType::DistanceVector => run_distance_vector(&self.topology),
            RoutingType::LinkState => run_link_state(&self.topology),
        };
        self.iteration += 1;
        debug!(
            routing_type = %self.routing_type,
            iteration = self.iteration,
            "simulation step"
        );
        self.previous_tables = self.tables.take();
        self.tables.insert(tables)
    }

    /// Replace the topology wholesale and start a fresh session.
    ///
    /// Clears computed tables, any staged poison, and the iteration
    /// counter.
    pub fn reset(&mut self, spec: &TopologySpec) -> Result<(), TopologyError> {
        self.topology = spec.build()?;
        self.iteration = 0;
        self.pending_poison = None;
        self.tables = None;
        self.previous_tables = None;
        info!(nodes = self.topology.len(), "simulation session reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(label: &str) -> NodeId {
        NodeId::from(label)
    }

    fn demo() -> Simulator {
        Simulator::new(&TopologySpec::classic_demo()).unwrap()
    }

    #[test]
    fn test_iteration_counts_steps_and_poisons() {
        let mut sim = demo();
        assert_eq!(sim.iteration(), 0);

        sim.step();
        assert_eq!(sim.iteration(), 1);

        sim.poison_route(&id("A"), &id("D")).unwrap();
        assert_eq!(sim.iteration(), 2);

        sim.step();
        assert_eq!(sim.iteration(), 3);
    }

    #[test]
    fn test_rejected_poison_does_not_advance_iteration() {
        let mut sim = demo();
        assert!(sim.poison_route(&id("A"), &id("Z")).is_err());
        assert_eq!(sim.iteration(), 0);
    }

    #[test]
    fn test_selecting_routing_type_does_not_compute() {
        let mut sim = demo();
        sim.set_routing_type(RoutingType::LinkState);
        assert_eq!(sim.iteration(), 0);
        assert!(sim.routing_tables().is_none());
    }

    #[test]
    fn test_step_dispatches_to_selected_engine() {
        let mut sim = demo();

        // Distance-vector output omits the self entry.
        sim.step();
        let dv = sim.routing_tables().unwrap();
        assert_eq!(dv.cost(&id("A"), &id("A")), None);
        assert_eq!(dv.cost(&id("A"), &id("D")), Some(Cost::new(3)));

        // Link-state output includes it at zero.
        sim.set_routing_type(RoutingType::LinkState);
        sim.step();
        let ls = sim.routing_tables().unwrap();
        assert_eq!(ls.cost(&id("A"), &id("A")), Some(Cost::ZERO));
        assert_eq!(ls.cost(&id("A"), &id("D")), Some(Cost::new(3)));
    }

    #[test]
    fn test_convergence_over_unchanged_topology() {
        let mut sim = demo();
        assert!(!sim.has_converged());

        sim.step();
        assert!(!sim.has_converged());

        sim.step();
        assert!(sim.has_converged());

        // A topology change breaks convergence on the next step.
        sim.poison_route(&id("B"), &id("C")).unwrap();
        sim.step();
        assert!(!sim.has_converged());
    }

    #[test]
    fn test_poison_then_step_reroutes() {
        let mut sim = demo();
        sim.set_routing_type(RoutingType::LinkState);
        sim.poison_route(&id("A"), &id("D")).unwrap();
        sim.step();

        let tables = sim.routing_tables().unwrap();
        // The alternate path A-B-C-D still wins at cost 3.
        assert_eq!(tables.cost(&id("A"), &id("D")), Some(Cost::new(3)));
        // The direct edge itself now advertises the poison cost.
        assert_eq!(
            sim.topology().link_cost(&id("A"), &id("D")),
            Some(Cost::POISONED)
        );
    }

    #[test]
    fn test_pending_poison_flow() {
        let mut sim = demo();

        assert!(!sim.apply_pending_poison().unwrap());
        assert_eq!(sim.iteration(), 0);

        sim.select_poison(id("A"), id("D"));
        assert!(sim.pending_poison().is_some());

        assert!(sim.apply_pending_poison().unwrap());
        assert!(sim.pending_poison().is_none());
        assert_eq!(sim.iteration(), 1);
        assert_eq!(
            sim.topology().link_cost(&id("A"), &id("D")),
            Some(Cost::POISONED)
        );
    }

    #[test]
    fn test_add_link_then_step_sees_new_route() {
        let mut sim = Simulator::new(
            &TopologySpec::new()
                .with_nodes(["A", "B", "X"])
                .with_link("A", "B", Cost::new(1)),
        )
        .unwrap();

        sim.step();
        assert_eq!(sim.routing_tables().unwrap().cost(&id("A"), &id("X")), None);

        sim.add_link(&id("B"), &id("X"), Cost::new(2)).unwrap();
        sim.step();
        assert_eq!(
            sim.routing_tables().unwrap().cost(&id("A"), &id("X")),
            Some(Cost::new(3))
        );
    }

    #[test]
    fn test_reset_replaces_session_wholesale() {
        let mut sim = demo();
        sim.step();
        sim.select_poison(id("A"), id("D"));

        sim.reset(&TopologySpec::new().with_nodes(["X", "Y"])).unwrap();

        assert_eq!(sim.iteration(), 0);
        assert!(sim.routing_tables().is_none());
        assert!(sim.pending_poison().is_none());
        assert_eq!(sim.topology().len(), 2);
    }
}
