//! Routing simulator CLI.
//!
//! Runs routing scenarios from the command line: the classic four-node
//! demo topology, or seeded random topologies cross-checked by both
//! engines.

use clap::{Parser, Subcommand};
use routesim_simulator::{
    generate_topology, render_tables, RandomTopologyConfig, RoutingType, Simulator, TopologySpec,
};
use routesim_types::NodeId;

#[derive(Parser)]
#[command(name = "routesim")]
#[command(about = "Network routing simulator: distance-vector and link-state")]
#[command(version)]
struct Cli {
    /// Emit routing tables as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the classic four-node demo topology
    Demo {
        /// Routing algorithm (distance-vector, link-state)
        #[arg(long, default_value = "distance-vector")]
        routing: String,

        /// Poison a link before simulating, e.g. "A-D"
        #[arg(long)]
        poison: Option<String>,

        /// Number of simulation steps to run
        #[arg(long, default_value = "1")]
        steps: u32,
    },

    /// Generate a seeded random topology and run both engines over it
    Random {
        /// Number of nodes
        #[arg(long, default_value = "8")]
        nodes: usize,

        /// Extra links beyond the connecting spanning tree
        #[arg(long, default_value = "6")]
        extra_links: usize,

        /// Maximum link cost
        #[arg(long, default_value = "10")]
        max_cost: u32,

        /// Random seed
        #[arg(long, default_value = "12345")]
        seed: u64,
    },
}

fn parse_routing_type(s: &str) -> Result<RoutingType, String> {
    match s.to_lowercase().as_str() {
        "distance-vector" | "dv" => Ok(RoutingType::DistanceVector),
        "link-state" | "ls" => Ok(RoutingType::LinkState),
        _ => Err(format!("Unknown routing type: {}", s)),
    }
}

/// Parse a poison pair written as "FROM-TO", e.g. "A-D".
fn parse_poison_pair(s: &str) -> Result<(NodeId, NodeId), String> {
    match s.split_once('-') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((NodeId::from(from), NodeId::from(to)))
        }
        _ => Err(format!("Invalid poison pair (expected FROM-TO): {}", s)),
    }
}

fn print_tables(sim: &Simulator, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(tables) = sim.routing_tables() else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(tables)?);
    } else {
        print!("{}", render_tables(tables));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            routing,
            poison,
            steps,
        } => {
            let mut sim = Simulator::new(&TopologySpec::classic_demo())?;
            sim.set_routing_type(parse_routing_type(&routing)?);

            if let Some(pair) = poison {
                let (from, to) = parse_poison_pair(&pair)?;
                sim.poison_route(&from, &to)?;
            }

            for _ in 0..steps {
                sim.step();
            }

            print_tables(&sim, cli.json)?;
            if !cli.json {
                println!(
                    "routing={} iteration={} converged={}",
                    sim.routing_type(),
                    sim.iteration(),
                    sim.has_converged()
                );
            }
        }

        Commands::Random {
            nodes,
            extra_links,
            max_cost,
            seed,
        } => {
            let config = RandomTopologyConfig::new(nodes)
                .with_extra_links(extra_links)
                .with_max_cost(max_cost)
                .with_seed(seed);
            let spec = generate_topology(&config);

            let mut sim = Simulator::new(&spec)?;

            sim.set_routing_type(RoutingType::DistanceVector);
            let dv = sim.step().clone();

            sim.set_routing_type(RoutingType::LinkState);
            let ls = sim.step().clone();

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "distance_vector": dv,
                        "link_state": ls,
                    }))?
                );
            } else {
                println!("# distance-vector");
                print!("{}", render_tables(&dv));
                println!("# link-state");
                print!("{}", render_tables(&ls));
            }

            let agree = dv.iter().all(|(node, table)| {
                table.iter().all(|(dest, cost)| ls.cost(node, dest) == Some(*cost))
            });
            if !cli.json {
                println!("seed={} engines_agree={}", seed, agree);
            }
        }
    }

    Ok(())
}
