//! Owner of the canonical graph.

use std::path::Path;
use std::sync::Arc;

use cp_core::TravelMode;

use crate::{Dataset, Graph, GraphResult, derive_graph, loader};

/// Holds the canonical (as-loaded, directed) graph.
///
/// The graph is behind an `Arc` and only ever handed out by shared
/// reference or as an `Arc` snapshot, so it cannot change after load.
/// Cloning a `GraphStore` is cheap and shares the same graph.
#[derive(Clone, Debug)]
pub struct GraphStore {
    canonical: Arc<Graph>,
}

impl GraphStore {
    /// Validate `raw` and take ownership of the resulting canonical graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`](crate::GraphError::EmptyGraph) for a
    /// dataset without nodes,
    /// [`GraphError::Integrity`](crate::GraphError::Integrity) for a link to
    /// an unknown node (or any other malformed record).
    pub fn load(raw: Dataset) -> GraphResult<Self> {
        raw.into_graph().map(Self::from_graph)
    }

    /// Load from a JSON file or a directory of CSV files.
    pub fn open(path: &Path) -> GraphResult<Self> {
        loader::load_path(path).map(Self::from_graph)
    }

    /// Wrap a graph built elsewhere (e.g. with [`GraphBuilder`](crate::GraphBuilder)).
    pub fn from_graph(graph: Graph) -> Self {
        Self { canonical: Arc::new(graph) }
    }

    /// Read-only view of the canonical graph.
    pub fn canonical(&self) -> &Graph {
        &self.canonical
    }

    /// Shared handle to the canonical graph, for use on other threads.
    pub fn snapshot(&self) -> Arc<Graph> {
        Arc::clone(&self.canonical)
    }

    /// Build the traversal graph for `mode`, always from the canonical graph.
    pub fn derive(&self, mode: TravelMode) -> Graph {
        derive_graph(&self.canonical, mode)
    }
}
