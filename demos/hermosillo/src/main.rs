//! hermosillo: thermal-comfort routing from the command line.
//!
//! Loads a road graph (or builds the demo grid), snaps two points to their
//! nearest nodes, and prints the coolest route between them as JSON.
//!
//! ```text
//! cargo run -p hermosillo -- --from 29.0655,-110.9645 --to 29.0745,-110.9555
//! cargo run -p hermosillo -- --graph demos/hermosillo/data/centro.json \
//!     --config demos/hermosillo/data/pedestrian.json \
//!     --from 29.0731,-110.9551 --to 29.0760,-110.9521
//! ```
//!
//! Exit status: 0 with a route, 2 when the points are not connected in the
//! chosen mode, 1 on any other error.

mod network;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{Level, info};

use cp_core::{GeoPoint, HeuristicKind, RouteConfig, TravelMode};
use cp_engine::{EngineBuilder, SnappedRoute};
use cp_graph::{GraphStore, Node};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph to load: a JSON node-link file, or a directory holding
    /// `nodes.csv` and `links.csv`.  Omit to use the built-in demo grid.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// JSON file with a `RouteConfig`.  Flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Travel mode: `vehicle` (one-way streets honoured) or `pedestrian`.
    #[arg(short, long)]
    mode: Option<TravelMode>,

    /// Start point as `lat,lon`.
    #[arg(long, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Destination as `lat,lon`.
    #[arg(long, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Scale the heuristic to the cost blend so routes are cost-optimal.
    #[arg(long)]
    admissible: bool,

    /// Give up after this many node expansions.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Log search details.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;

    let store = match &cli.graph {
        Some(path) => GraphStore::open(path)
            .with_context(|| format!("loading graph from {}", path.display()))?,
        None => {
            info!("no --graph given, using the built-in Hermosillo grid");
            GraphStore::load(network::build_dataset())?
        }
    };

    let engine = EngineBuilder::new(store).config(config).build()?;

    match engine.route(cli.from, cli.to) {
        Ok(trip) => {
            println!("{}", serde_json::to_string_pretty(&trip_json(&trip))?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_no_path() => {
            eprintln!("no route in {} mode: {e}", engine.mode());
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}

fn load_config(cli: &Cli) -> Result<RouteConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RouteConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if cli.admissible {
        config.heuristic = HeuristicKind::ScaledHaversine;
    }
    if cli.max_expansions.is_some() {
        config.max_expansions = cli.max_expansions;
    }
    Ok(config)
}

fn node_json(n: &Node) -> serde_json::Value {
    json!({ "id": n.id.0, "lat": n.pos.lat, "lon": n.pos.lon })
}

fn trip_json(trip: &SnappedRoute) -> serde_json::Value {
    let path: Vec<[f64; 2]> = trip
        .route
        .coordinates
        .iter()
        .map(|p| [p.lat, p.lon])
        .collect();

    json!({
        "mode":        trip.mode.as_str(),
        "start":       node_json(&trip.start),
        "goal":        node_json(&trip.goal),
        "cost":        trip.route.cost,
        "distance_km": trip.route.distance_km,
        "delta_temp":  trip.route.delta_temp,
        "expansions":  trip.route.expansions,
        "path":        path,
    })
}
