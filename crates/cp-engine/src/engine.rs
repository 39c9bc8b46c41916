//! The `RoutingEngine` and its query methods.

use std::sync::Arc;

use tracing::{debug, info};

use cp_core::{GeoPoint, NodeIdx, RouteConfig, Snapping, TravelMode};
use cp_graph::{Graph, GraphStore, Node};
use cp_search::{AStarRouter, Route, Router};

use crate::EngineResult;

/// A route together with the nodes the query points snapped to.
#[derive(Debug, Clone)]
pub struct SnappedRoute {
    pub start: Node,
    pub goal:  Node,
    /// Mode of the graph the route was computed on.
    pub mode:  TravelMode,
    pub route: Route,
}

/// Holds the canonical graph, the current travel mode, and the active
/// traversal graph derived for that mode.
///
/// The active graph is an immutable `Arc` snapshot.  Switching modes builds
/// a new graph from the canonical one and swaps the `Arc`; a snapshot taken
/// earlier through [`snapshot`](Self::snapshot) keeps the edge set it was
/// taken with.  Each query allocates its own search state, so `&self`
/// queries may run concurrently.
///
/// Create via [`EngineBuilder`](crate::EngineBuilder).
pub struct RoutingEngine<R: Router = AStarRouter> {
    store:    GraphStore,
    mode:     TravelMode,
    active:   Arc<Graph>,
    snapping: Snapping,
    router:   R,
}

impl<R: Router> RoutingEngine<R> {
    pub(crate) fn new(store: GraphStore, router: R, config: &RouteConfig) -> Self {
        let active = Arc::new(store.derive(config.mode));
        info!(
            mode = %config.mode,
            nodes = active.node_count(),
            edges = active.edge_count(),
            "routing engine ready"
        );
        Self {
            store,
            mode: config.mode,
            active,
            snapping: config.snapping,
            router,
        }
    }

    // ── Mode control ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Switch the travel mode, rebuilding the active graph from the
    /// canonical graph.  A no-op if `mode` is already active.
    pub fn set_mode(&mut self, mode: TravelMode) {
        if mode == self.mode {
            debug!(%mode, "travel mode unchanged");
            return;
        }
        self.active = Arc::new(self.store.derive(mode));
        self.mode = mode;
        info!(%mode, edges = self.active.edge_count(), "travel mode switched");
    }

    /// Switch to the other mode and return it.
    pub fn toggle_mode(&mut self) -> TravelMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    // ── Graph access ──────────────────────────────────────────────────────

    /// The graph as loaded.
    pub fn canonical(&self) -> &Graph {
        self.store.canonical()
    }

    /// The graph searches currently run against.
    pub fn active(&self) -> &Graph {
        &self.active
    }

    /// Shared handle to the active graph.  Unaffected by later mode switches.
    pub fn snapshot(&self) -> Arc<Graph> {
        Arc::clone(&self.active)
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The node nearest to `pos` in the active graph.
    pub fn snap(&self, pos: GeoPoint) -> EngineResult<&Node> {
        Ok(self.active.nearest_node(pos, self.snapping)?)
    }

    /// Snap both points and route between the snapped nodes.
    ///
    /// Failures are typed: an empty graph, or no route in the current mode
    /// (see [`EngineError::is_no_path`](crate::EngineError::is_no_path)).
    pub fn route(&self, from: GeoPoint, to: GeoPoint) -> EngineResult<SnappedRoute> {
        let graph = &self.active;
        let start = graph.snap(from, self.snapping)?;
        let goal = graph.snap(to, self.snapping)?;
        debug!(
            from = %from,
            to = %to,
            start = %graph.node(start).id,
            goal = %graph.node(goal).id,
            "snapped query points"
        );

        let route = self.router.route(graph, start, goal)?;
        Ok(SnappedRoute {
            start: *graph.node(start),
            goal:  *graph.node(goal),
            mode:  self.mode,
            route,
        })
    }

    /// Route between two nodes of the active graph, skipping snapping.
    pub fn route_nodes(&self, from: NodeIdx, to: NodeIdx) -> EngineResult<Route> {
        Ok(self.router.route(&self.active, from, to)?)
    }

    /// Answer independent queries, in order.
    ///
    /// With the `parallel` feature the queries run on Rayon's thread pool.
    /// Results are identical either way.
    pub fn route_many(&self, queries: &[(GeoPoint, GeoPoint)]) -> Vec<EngineResult<SnappedRoute>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries.par_iter().map(|&(a, b)| self.route(a, b)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(|&(a, b)| self.route(a, b)).collect()
        }
    }
}
