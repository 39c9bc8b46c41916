//! Dataset loaders.
//!
//! # JSON format
//!
//! A node-link document, as exported by the preprocessing pipeline:
//!
//! ```json
//! {
//!   "nodes": [ {"id": 1, "lat": 29.073, "lon": -110.955}, ... ],
//!   "links": [ {"source": 1, "target": 2, "distancia": 0.12, "delta_temp": 0.8}, ... ]
//! }
//! ```
//!
//! Unknown top-level or per-record keys (`directed`, `graph`, `osmid`, …)
//! are ignored.  `distancia` is the edge length in kilometres; `distance`
//! is accepted as an alias.
//!
//! # CSV format
//!
//! Two files in one directory:
//!
//! ```csv
//! # nodes.csv
//! id,lat,lon
//! 1,29.073,-110.955
//! # links.csv
//! source,target,distancia,delta_temp
//! 1,2,0.12,0.8
//! ```
//!
//! Both formats go through [`Dataset::into_graph`], so validation is
//! identical.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use cp_core::{GeoPoint, NodeId};

use crate::{Graph, GraphBuilder, GraphError, GraphResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// One entry of the dataset's `nodes` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NodeRecord {
    pub id:  u64,
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the dataset's `links` array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinkRecord {
    pub source:      u64,
    pub target:      u64,
    #[serde(rename = "distancia", alias = "distance")]
    pub distance_km: f64,
    pub delta_temp:  f64,
}

/// Raw node/link dataset, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

impl Dataset {
    /// Validate the dataset and build the canonical [`Graph`].
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyGraph`] if `nodes` is empty.
    /// - [`GraphError::Integrity`] if a link references an id absent from
    ///   `nodes`, an id is repeated, or a coordinate/weight is not a valid
    ///   number.
    pub fn into_graph(self) -> GraphResult<Graph> {
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut builder = GraphBuilder::with_capacity(self.nodes.len(), self.links.len());
        for n in &self.nodes {
            builder.add_node(NodeId(n.id), GeoPoint::new(n.lat, n.lon))?;
        }
        for l in &self.links {
            builder.add_edge(NodeId(l.source), NodeId(l.target), l.distance_km, l.delta_temp)?;
        }

        let graph = builder.build()?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded road graph"
        );
        Ok(graph)
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Load and validate a graph from a JSON node-link file.
pub fn load_json(path: &Path) -> GraphResult<Graph> {
    let file = File::open(path)?;
    load_json_reader(BufReader::new(file))
}

/// Like [`load_json`] but accepts any `Read` source.
pub fn load_json_reader<R: Read>(reader: R) -> GraphResult<Graph> {
    let dataset: Dataset = serde_json::from_reader(reader)
        .map_err(|e| GraphError::Parse(e.to_string()))?;
    dataset.into_graph()
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Load and validate a graph from `nodes.csv` and `links.csv` in `dir`.
pub fn load_csv(dir: &Path) -> GraphResult<Graph> {
    let nodes = File::open(dir.join("nodes.csv"))?;
    let links = File::open(dir.join("links.csv"))?;
    load_csv_readers(nodes, links)
}

/// Like [`load_csv`] but accepts any pair of `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s).
pub fn load_csv_readers<N: Read, L: Read>(nodes: N, links: L) -> GraphResult<Graph> {
    fn read_all<T, R>(reader: R) -> GraphResult<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
        R: Read,
    {
        csv::Reader::from_reader(reader)
            .deserialize::<T>()
            .map(|row| row.map_err(|e| GraphError::Parse(e.to_string())))
            .collect()
    }

    Dataset {
        nodes: read_all(nodes)?,
        links: read_all(links)?,
    }
    .into_graph()
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Load from a JSON file, or from a directory holding the CSV pair.
pub fn load_path(path: &Path) -> GraphResult<Graph> {
    if path.is_dir() {
        load_csv(path)
    } else {
        load_json(path)
    }
}
