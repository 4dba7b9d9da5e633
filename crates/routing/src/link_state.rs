//! Link-state routing: per-source shortest paths over the full topology.

use crate::{RoutingTable, RoutingTables};
use routesim_types::{Cost, NodeId, Topology};
use std::collections::HashSet;
use tracing::trace;

/// Compute every node's routing table by running a single-source
/// shortest-path search from each node in turn.
///
/// Unlike distance-vector output, each table carries an explicit entry
/// for every node in the topology: the source itself at zero and
/// unreachable nodes at [`Cost::INFINITY`].
pub fn run_link_state(topology: &Topology) -> RoutingTables {
    let mut tables = RoutingTables::new();
    for source in topology.nodes() {
        tables.insert(source.id().clone(), single_source(topology, source.id()));
    }
    tables
}

/// Dijkstra with a linear scan for the cheapest unvisited node.
///
/// The topology is small enough that a priority queue buys nothing; the
/// scan also makes tie-breaking explicit: among equally cheap unvisited
/// nodes, the one registered first wins.
fn single_source(topology: &Topology, source: &NodeId) -> RoutingTable {
    let mut distances: RoutingTable = topology
        .node_ids()
        .map(|id| (id.clone(), Cost::INFINITY))
        .collect();
    distances.insert(source.clone(), Cost::ZERO);

    let mut visited: HashSet<NodeId> = HashSet::with_capacity(distances.len());

    while visited.len() < distances.len() {
        // Cheapest unvisited node; everything left at infinity means the
        // rest of the graph is unreachable from this source.
        let next = distances
            .iter()
            .filter(|(id, cost)| !visited.contains(*id) && !cost.is_infinite())
            .min_by_key(|(_, cost)| **cost)
            .map(|(id, cost)| (id.clone(), *cost));
        let Some((current, current_cost)) = next else {
            break;
        };
        visited.insert(current.clone());

        let Some(node) = topology.node(&current) else {
            continue;
        };
        for (neighbor, link_cost) in node.distances() {
            let candidate = current_cost.saturating_add(*link_cost);
            if let Some(estimate) = distances.get_mut(neighbor) {
                if candidate < *estimate {
                    trace!(
                        source = %source,
                        via = %current,
                        dest = %neighbor,
                        cost = %candidate,
                        "relaxed edge"
                    );
                    *estimate = candidate;
                }
            }
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_distance_vector;

    fn id(label: &str) -> NodeId {
        NodeId::from(label)
    }

    fn classic() -> Topology {
        let mut topology = Topology::with_nodes(["A", "B", "C", "D"]);
        topology.add_link(&id("A"), &id("B"), Cost::new(1)).unwrap();
        topology.add_link(&id("B"), &id("C"), Cost::new(1)).unwrap();
        topology.add_link(&id("C"), &id("D"), Cost::new(1)).unwrap();
        topology.add_link(&id("A"), &id("D"), Cost::new(4)).unwrap();
        topology
    }

    #[test]
    fn test_shortest_paths_from_each_source() {
        let tables = run_link_state(&classic());

        assert_eq!(tables.cost(&id("A"), &id("A")), Some(Cost::ZERO));
        assert_eq!(tables.cost(&id("A"), &id("B")), Some(Cost::new(1)));
        assert_eq!(tables.cost(&id("A"), &id("C")), Some(Cost::new(2)));
        assert_eq!(tables.cost(&id("A"), &id("D")), Some(Cost::new(3)));

        assert_eq!(tables.cost(&id("D"), &id("A")), Some(Cost::new(3)));
        assert_eq!(tables.cost(&id("D"), &id("B")), Some(Cost::new(2)));
        assert_eq!(tables.cost(&id("D"), &id("C")), Some(Cost::new(1)));
        assert_eq!(tables.cost(&id("D"), &id("D")), Some(Cost::ZERO));
    }

    #[test]
    fn test_every_table_covers_every_node() {
        let topology = classic();
        let tables = run_link_state(&topology);

        for (_, table) in &tables {
            assert_eq!(table.len(), topology.len());
        }
    }

    #[test]
    fn test_unreachable_nodes_report_infinity() {
        let mut topology = Topology::with_nodes(["A", "B", "X"]);
        topology.add_link(&id("A"), &id("B"), Cost::new(1)).unwrap();

        let tables = run_link_state(&topology);

        assert_eq!(tables.cost(&id("A"), &id("X")), Some(Cost::INFINITY));
        assert_eq!(tables.cost(&id("X"), &id("A")), Some(Cost::INFINITY));
        assert_eq!(tables.cost(&id("X"), &id("X")), Some(Cost::ZERO));
    }

    #[test]
    fn test_poisoning_leaves_cheaper_alternate_untouched() {
        let mut topology = classic();
        topology.poison(&id("A"), &id("D")).unwrap();

        let tables = run_link_state(&topology);

        // Shortest path A-B-C-D never used the poisoned edge.
        assert_eq!(tables.cost(&id("A"), &id("D")), Some(Cost::new(3)));
    }

    #[test]
    fn test_idempotent_over_unchanged_topology() {
        let topology = classic();
        assert_eq!(run_link_state(&topology), run_link_state(&topology));
    }

    #[test]
    fn test_agrees_with_distance_vector_on_reachable_costs() {
        let topology = classic();
        let ls = run_link_state(&topology);
        let dv = run_distance_vector(&topology);

        for (node, table) in &dv {
            for (dest, cost) in table {
                assert_eq!(ls.cost(node, dest), Some(*cost));
            }
        }
    }

    #[test]
    fn test_zero_cost_links() {
        let mut topology = Topology::with_nodes(["A", "B", "C"]);
        topology.add_link(&id("A"), &id("B"), Cost::ZERO).unwrap();
        topology.add_link(&id("B"), &id("C"), Cost::new(2)).unwrap();

        let tables = run_link_state(&topology);

        assert_eq!(tables.cost(&id("A"), &id("B")), Some(Cost::ZERO));
        assert_eq!(tables.cost(&id("A"), &id("C")), Some(Cost::new(2)));
    }

    #[test]
    fn test_empty_topology() {
        assert!(run_link_state(&Topology::new()).is_empty());
    }
}
