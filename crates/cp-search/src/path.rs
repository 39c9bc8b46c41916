//! Route type and predecessor-chain reconstruction.

use cp_core::{EdgeIdx, GeoPoint, NodeId, NodeIdx};
use cp_graph::Graph;

use crate::{SearchError, SearchResult, edge_cost};

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes visited in order, start first, goal last.  Never empty.
    pub nodes: Vec<NodeIdx>,
    /// Edges traversed in order; one fewer than `nodes`.
    pub edges: Vec<EdgeIdx>,
    /// `(lat, lon)` of every entry in `nodes`.
    pub coordinates: Vec<GeoPoint>,
    /// Sum of [`edge_cost`] over `edges`.
    pub cost: f64,
    /// Sum of edge lengths in kilometres.
    pub distance_km: f64,
    /// Sum of edge thermal penalties.
    pub delta_temp: f64,
    /// Nodes expanded by the search that produced this route.
    pub expansions: usize,
}

impl Route {
    /// Single-node route for a query whose start and goal coincide.
    pub fn trivial(graph: &Graph, node: NodeIdx) -> Route {
        Route {
            nodes:       vec![node],
            edges:       Vec::new(),
            coordinates: vec![graph.node(node).pos],
            cost:        0.0,
            distance_km: 0.0,
            delta_temp:  0.0,
            expansions:  0,
        }
    }

    /// `true` if the start and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Dataset ids of the visited nodes.
    pub fn node_ids(&self, graph: &Graph) -> Vec<NodeId> {
        self.nodes.iter().map(|&n| graph.node(n).id).collect()
    }

    /// `(lat, lon)` pairs, the shape map layers expect.
    pub fn lat_lon_pairs(&self) -> Vec<(f64, f64)> {
        self.coordinates.iter().map(|p| (p.lat, p.lon)).collect()
    }
}

/// Walk `came_from` back from `goal` to the start (the first node with no
/// predecessor edge) and return the route in start→goal order.
///
/// A consistent predecessor chain has at most `node_count - 1` edges; a
/// longer walk means the chain loops, reported as
/// [`SearchError::BrokenPredecessorChain`].
pub fn reconstruct(graph: &Graph, came_from: &[EdgeIdx], goal: NodeIdx) -> SearchResult<Route> {
    let mut edges = Vec::new();
    let mut cur = goal;
    loop {
        let e = came_from[cur.index()];
        if !e.is_valid() {
            break;
        }
        if edges.len() >= graph.node_count() {
            return Err(SearchError::BrokenPredecessorChain(goal));
        }
        edges.push(e);
        cur = graph.edge(e).source;
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(cur);
    nodes.extend(edges.iter().map(|&e| graph.edge(e).target));

    let (mut cost, mut distance_km, mut delta_temp) = (0.0, 0.0, 0.0);
    for &e in &edges {
        let edge = graph.edge(e);
        cost        += edge_cost(edge);
        distance_km += edge.distance_km;
        delta_temp  += edge.delta_temp;
    }

    Ok(Route {
        coordinates: nodes.iter().map(|&n| graph.node(n).pos).collect(),
        nodes,
        edges,
        cost,
        distance_km,
        delta_temp,
        expansions: 0,
    })
}
