//! Distance-vector routing: synchronous Bellman-Ford relaxation.

use crate::RoutingTables;
use routesim_types::{Cost, NodeId, Topology};
use tracing::trace;

/// Compute every node's routing table by iterative relaxation.
///
/// Each node starts from its direct link costs and, over `N - 1` rounds,
/// adopts any route a neighbor advertises whenever reaching the
/// destination through that neighbor is cheaper than what it currently
/// knows. Tables are updated in place as nodes are visited within a
/// round, so later nodes in a round may see earlier nodes' fresh values;
/// intermediate round states depend on visitation order, but after
/// `N - 1` rounds the result is order-independent: the true shortest-path
/// cost to every reachable destination. Costs are non-negative, so no
/// negative cycles can exist; a poisoned link is just a large finite
/// cost and can still be routed around.
///
/// Unreachable destinations stay absent from the table, and a node never
/// lists itself as a destination.
pub fn run_distance_vector(topology: &Topology) -> RoutingTables {
    let mut tables = RoutingTables::new();
    for node in topology.nodes() {
        tables.insert(node.id().clone(), node.distances().clone());
    }

    let rounds = topology.len().saturating_sub(1);
    for round in 0..rounds {
        for node in topology.nodes() {
            for (neighbor, link_cost) in node.distances() {
                let advertised: Vec<(NodeId, Cost)> = match tables.table(neighbor) {
                    Some(table) => table
                        .iter()
                        .filter(|(dest, _)| *dest != node.id())
                        .map(|(dest, cost)| (dest.clone(), *cost))
                        .collect(),
                    None => continue,
                };

                let Some(table) = tables.table_mut(node.id()) else {
                    continue;
                };
                for (dest, neighbor_cost) in advertised {
                    let candidate = link_cost.saturating_add(neighbor_cost);
                    let improved = match table.get(&dest) {
                        Some(current) => candidate < *current,
                        None => true,
                    };
                    if improved {
                        trace!(
                            round,
                            node = %node.id(),
                            via = %neighbor,
                            dest = %dest,
                            cost = %candidate,
                            "adopted route"
                        );
                        table.insert(dest, candidate);
                    }
                }
            }
        }
    }

    tables
}
