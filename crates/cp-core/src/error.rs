//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `SearchError`,
//! `EngineError`); this one only covers parsing and validating the shared
//! value types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown travel mode {0:?}: expected \"vehicle\" or \"pedestrian\"")]
    InvalidMode(String),

    #[error("invalid coordinate {0:?}: expected \"lat,lon\"")]
    InvalidPoint(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
