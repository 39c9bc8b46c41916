//! Routing trait and the A* implementation.
//!
//! # Pluggability
//!
//! The engine calls routing through the [`Router`] trait, so applications
//! can swap in other searches without touching the engine.  The default
//! [`AStarRouter`] runs best-first search on the composite
//! [`edge_cost`](crate::edge_cost) with a pluggable [`Heuristic`].

use tracing::{debug, warn};

use cp_core::{HeuristicKind, NodeIdx, RouteConfig};
use cp_graph::Graph;

use crate::{Haversine, Heuristic, Route, SearchError, SearchResult, SearchState, edge_cost, reconstruct};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve
/// concurrent queries against a shared graph.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` over `graph`.
    ///
    /// `from == to` yields a trivial single-node route, not an error.
    fn route(&self, graph: &Graph, from: NodeIdx, to: NodeIdx) -> SearchResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* search with heuristic `H` and an optional expansion cap.
#[derive(Clone, Debug, Default)]
pub struct AStarRouter<H: Heuristic = HeuristicKind> {
    heuristic:      H,
    max_expansions: Option<usize>,
}

impl<H: Heuristic> AStarRouter<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic, max_expansions: None }
    }

    /// Give up with [`SearchError::ExpansionLimit`] after `limit` expansions.
    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl From<&RouteConfig> for AStarRouter<HeuristicKind> {
    fn from(config: &RouteConfig) -> Self {
        AStarRouter::new(config.heuristic).with_max_expansions(config.max_expansions)
    }
}

impl<H: Heuristic> Router for AStarRouter<H> {
    fn route(&self, graph: &Graph, from: NodeIdx, to: NodeIdx) -> SearchResult<Route> {
        astar(graph, from, to, &self.heuristic, self.max_expansions)
    }
}

/// A* with the raw haversine heuristic and no expansion cap.
pub fn search(graph: &Graph, start: NodeIdx, goal: NodeIdx) -> SearchResult<Route> {
    AStarRouter::new(Haversine).route(graph, start, goal)
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar<H: Heuristic>(
    graph:          &Graph,
    start:          NodeIdx,
    goal:           NodeIdx,
    heuristic:      &H,
    max_expansions: Option<usize>,
) -> SearchResult<Route> {
    if graph.is_empty() {
        return Err(SearchError::EmptyGraph);
    }
    for n in [start, goal] {
        if !graph.contains(n) {
            return Err(SearchError::NodeOutOfRange(n));
        }
    }
    if start == goal {
        return Ok(Route::trivial(graph, start));
    }

    let goal_pos = graph.node(goal).pos;
    let mut state = SearchState::new(graph.node_count());
    state.seed(start);

    while let Some(current) = state.pop_open() {
        if current == goal {
            let mut route = reconstruct(graph, state.came_from(), goal)?;
            route.expansions = state.expansions();
            debug!(
                from = %graph.node(start).id,
                to = %graph.node(goal).id,
                cost = route.cost,
                hops = route.edges.len(),
                expansions = route.expansions,
                "route found"
            );
            return Ok(route);
        }

        if let Some(limit) = max_expansions {
            if state.expansions() >= limit {
                warn!(
                    from = %graph.node(start).id,
                    to = %graph.node(goal).id,
                    limit,
                    "expansion limit reached"
                );
                return Err(SearchError::ExpansionLimit {
                    from: graph.node(start).id,
                    to:   graph.node(goal).id,
                    limit,
                });
            }
        }

        state.close(current);
        let g_current = state.g_score(current);

        for e in graph.out_edges(current) {
            let edge = graph.edge(e);
            let next = edge.target;
            if state.is_closed(next) {
                continue;
            }
            let tentative = g_current + edge_cost(edge);
            if tentative < state.g_score(next) {
                let h = heuristic.estimate(graph.node(next).pos, goal_pos);
                state.relax(next, e, tentative, h);
            }
        }
    }

    debug!(
        from = %graph.node(start).id,
        to = %graph.node(goal).id,
        expansions = state.expansions(),
        "open set exhausted"
    );
    Err(SearchError::NoPath {
        from: graph.node(start).id,
        to:   graph.node(goal).id,
    })
}
