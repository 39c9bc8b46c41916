//! Fluent builder for constructing a [`RoutingEngine`].

use std::path::Path;

use cp_core::RouteConfig;
use cp_graph::GraphStore;
use cp_search::{AStarRouter, Router};

use crate::{EngineResult, RoutingEngine};

/// Fluent builder for [`RoutingEngine<R>`].
///
/// # Required inputs
///
/// - [`GraphStore`]: the canonical graph.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                        |
/// |---------------|------------------------------------------------|
/// | `.config(c)`  | `RouteConfig::default()` (vehicle, raw haversine) |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(store)
///     .config(config)
///     .build()?;
/// ```
pub struct EngineBuilder {
    store:  GraphStore,
    config: RouteConfig,
}

impl EngineBuilder {
    pub fn new(store: GraphStore) -> Self {
        Self { store, config: RouteConfig::default() }
    }

    /// Load the canonical graph from a JSON file or a CSV directory.
    pub fn open(path: &Path) -> EngineResult<Self> {
        Ok(Self::new(GraphStore::open(path)?))
    }

    /// Supply the routing configuration.
    pub fn config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and return an engine using
    /// [`AStarRouter`] configured from it.
    pub fn build(self) -> EngineResult<RoutingEngine> {
        let router = AStarRouter::from(&self.config);
        self.build_with(router)
    }

    /// Like [`build`](Self::build) with a caller-supplied router.  The
    /// config's `heuristic` and `max_expansions` are then up to `router`.
    pub fn build_with<R: Router>(self, router: R) -> EngineResult<RoutingEngine<R>> {
        self.config.validate()?;
        Ok(RoutingEngine::new(self.store, router, &self.config))
    }
}
