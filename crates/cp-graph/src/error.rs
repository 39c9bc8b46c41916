//! Graph-subsystem error types.

use thiserror::Error;

use cp_core::{GeoPoint, NodeId};

/// Errors produced by `cp-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("query point {0} is not a finite coordinate")]
    InvalidQuery(GeoPoint),

    #[error("graph integrity violated: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// `true` for any integrity violation in the input dataset.
    pub fn is_integrity(&self) -> bool {
        matches!(self, GraphError::Integrity(_))
    }
}

/// A dataset that parsed but does not describe a valid graph.
#[derive(Debug, Error, PartialEq)]
pub enum IntegrityError {
    #[error("link {link} references unknown {node}")]
    UnknownNode { link: usize, node: NodeId },

    #[error("{0} appears more than once")]
    DuplicateNode(NodeId),

    #[error("{0} has a non-finite coordinate")]
    NonFiniteCoordinate(NodeId),

    #[error("link {link} has invalid {field} {value}")]
    InvalidWeight {
        link:  usize,
        field: &'static str,
        value: f64,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
