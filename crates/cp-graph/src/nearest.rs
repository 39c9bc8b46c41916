//! Nearest-node snapping.
//!
//! The contract is the linear scan: the node with the smallest great-circle
//! distance to the query, ties going to the node that comes first in dataset
//! order.  The R-tree path returns the same node.  It walks candidates in
//! chord-distance order, re-ranks everything inside a tiny tolerance window
//! around the closest chord by exact haversine distance, and breaks exact
//! ties by `NodeIdx`.
//!
//! Both strategies reject a query with a NaN or infinite component with
//! [`GraphError::InvalidQuery`].

use cp_core::{GeoPoint, NodeIdx, Snapping};

use crate::{Graph, GraphError, GraphResult, Node};

/// Relative slack on the squared chord length when collecting near-ties.
/// Chord and haversine round differently once two candidates are less than
/// about a metre apart in distance to the query; the window keeps both.
const CHORD_REL_TOL: f64 = 1e-9;
/// Absolute slack for queries that sit exactly on a node, where the
/// relative window collapses to zero.
const CHORD_ABS_TOL: f64 = 1e-20;

impl Graph {
    /// Index of the node closest to `pos`.
    ///
    /// Returns [`GraphError::EmptyGraph`] if the graph has no nodes and
    /// [`GraphError::InvalidQuery`] if `pos` is not finite.
    pub fn snap(&self, pos: GeoPoint, strategy: Snapping) -> GraphResult<NodeIdx> {
        match strategy {
            Snapping::Linear  => nearest_linear(self, pos),
            Snapping::Indexed => nearest_indexed(self, pos),
        }
    }

    /// Like [`snap`](Self::snap) but returns the node itself.
    pub fn nearest_node(&self, pos: GeoPoint, strategy: Snapping) -> GraphResult<&Node> {
        self.snap(pos, strategy).map(|idx| self.node(idx))
    }
}

/// Brute-force O(n) scan over every node.
pub fn nearest_linear(graph: &Graph, pos: GeoPoint) -> GraphResult<NodeIdx> {
    check_query(pos)?;
    let mut best: Option<(f64, NodeIdx)> = None;
    for (i, node) in graph.nodes().iter().enumerate() {
        let d = pos.distance_km(node.pos);
        if best.is_none_or(|(min, _)| d < min) {
            best = Some((d, NodeIdx(i as u32)));
        }
    }
    best.map(|(_, idx)| idx).ok_or(GraphError::EmptyGraph)
}

/// R-tree accelerated search.  Same result as [`nearest_linear`].
pub fn nearest_indexed(graph: &Graph, pos: GeoPoint) -> GraphResult<NodeIdx> {
    check_query(pos)?;
    let query = pos.to_unit_vector();

    let mut best: Option<(f64, NodeIdx)> = None;
    let mut window = f64::INFINITY;

    for (entry, chord2) in graph.spatial_idx.nearest_neighbor_iter_with_distance_2(&query) {
        if chord2 > window {
            break;
        }
        if best.is_none() {
            window = chord2 * (1.0 + CHORD_REL_TOL) + CHORD_ABS_TOL;
        }

        let d = pos.distance_km(graph.node(entry.idx).pos);
        let better = match best {
            None => true,
            Some((min, idx)) => d < min || (d == min && entry.idx < idx),
        };
        if better {
            best = Some((d, entry.idx));
        }
    }

    best.map(|(_, idx)| idx).ok_or(GraphError::EmptyGraph)
}

/// NaN would compare false against every distance, and rstar panics on it.
fn check_query(pos: GeoPoint) -> GraphResult<()> {
    if pos.is_finite() { Ok(()) } else { Err(GraphError::InvalidQuery(pos)) }
}
