//! Search-subsystem error type.

use thiserror::Error;

use cp_core::{NodeId, NodeIdx};

/// Errors produced by `cp-search`.
///
/// `NoPath` and `ExpansionLimit` are ordinary outcomes of a query on a
/// disconnected or oversized graph; see [`SearchError::is_no_path`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("no route from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("gave up routing from {from} to {to} after {limit} expansions")]
    ExpansionLimit { from: NodeId, to: NodeId, limit: usize },

    #[error("{0} is not a node of this graph")]
    NodeOutOfRange(NodeIdx),

    #[error("predecessor chain from {0} does not lead back to the start")]
    BrokenPredecessorChain(NodeIdx),
}

impl SearchError {
    /// `true` when no route was produced for the query itself (open set
    /// exhausted, or cut off by the expansion limit).
    pub fn is_no_path(&self) -> bool {
        matches!(self, SearchError::NoPath { .. } | SearchError::ExpansionLimit { .. })
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
