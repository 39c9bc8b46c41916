//! Travel-mode derivation of the traversal graph.
//!
//! Every derivation is a full rebuild from the canonical edges: the result
//! for a mode never depends on which graph was active before, so toggling
//! modes any number of times cannot accumulate reverse arcs.

use tracing::debug;

use cp_core::TravelMode;

use crate::{Edge, Graph};

/// Build the traversal graph for `mode` from `canonical`.
///
/// - [`TravelMode::Vehicle`]: exactly the canonical edges, in order.
/// - [`TravelMode::Pedestrian`]: the canonical edges, followed by one
///   reversed copy of each (same distance and `delta_temp`), in canonical
///   order.  Weights are copied per direction, never assumed symmetric.
///
/// Only [`Graph::canonical_edges`] is read, so passing an already derived
/// graph yields the same result as passing its canonical source.
pub fn derive_graph(canonical: &Graph, mode: TravelMode) -> Graph {
    let base = canonical.canonical_edges();

    let edges: Vec<Edge> = match mode {
        TravelMode::Vehicle => base.to_vec(),
        TravelMode::Pedestrian => {
            let mut edges = Vec::with_capacity(base.len() * 2);
            edges.extend_from_slice(base);
            edges.extend(base.iter().map(|e| e.reversed()));
            edges
        }
    };

    debug!(%mode, canonical = base.len(), edges = edges.len(), "derived traversal graph");
    canonical.with_edges(edges, mode)
}
