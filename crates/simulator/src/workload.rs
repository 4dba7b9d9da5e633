//! Seeded random topology generation.
//!
//! Used by the CLI's `random` subcommand and by agreement tests that
//! cross-check the two engines over many shapes. Generation is fully
//! deterministic: the same seed always yields the same topology.

use crate::config::TopologySpec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use routesim_types::{Cost, NodeId};
use tracing::debug;

/// Shape parameters for a generated topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTopologyConfig {
    /// Number of nodes to generate.
    pub nodes: usize,

    /// Extra links added on top of the connecting spanning tree.
    pub extra_links: usize,

    /// Link costs are drawn uniformly from `1..=max_cost`.
    pub max_cost: u32,

    /// Random seed.
    pub seed: u64,
}

impl RandomTopologyConfig {
    /// Create a config for the given node count.
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    /// Set the number of extra links.
    pub fn with_extra_links(mut self, extra_links: usize) -> Self {
        self.extra_links = extra_links;
        self
    }

    /// Set the maximum link cost.
    pub fn with_max_cost(mut self, max_cost: u32) -> Self {
        self.max_cost = max_cost.max(1);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for RandomTopologyConfig {
    fn default() -> Self {
        Self {
            nodes: 8,
            extra_links: 6,
            max_cost: 10,
            seed: 12345,
        }
    }
}

/// Generate a connected random topology.
///
/// Every node past the first links to a random earlier node, which
/// forms a spanning tree and guarantees connectivity; `extra_links`
/// additional links between random distinct pairs then add alternate
/// paths (re-rolled pairs may overwrite an existing link's cost).
pub fn generate_topology(config: &RandomTopologyConfig) -> TopologySpec {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let ids: Vec<NodeId> = (0..config.nodes)
        .map(|i| NodeId::new(format!("n{i}")))
        .collect();
    let mut spec = TopologySpec::new().with_nodes(ids.iter().cloned());

    for i in 1..ids.len() {
        let parent = rng.gen_range(0..i);
        let cost = Cost::new(rng.gen_range(1..=config.max_cost));
        spec = spec.with_link(ids[parent].clone(), ids[i].clone(), cost);
    }

    if ids.len() >= 2 {
        for _ in 0..config.extra_links {
            let a = rng.gen_range(0..ids.len());
            let b = rng.gen_range(0..ids.len());
            if a == b {
                continue;
            }
            let cost = Cost::new(rng.gen_range(1..=config.max_cost));
            spec = spec.with_link(ids[a].clone(), ids[b].clone(), cost);
        }
    }

    debug!(
        nodes = spec.nodes().len(),
        links = spec.links().len(),
        seed = config.seed,
        "generated random topology"
    );
    spec
}
