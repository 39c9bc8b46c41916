use cp_core::CoreError;
use cp_graph::GraphError;
use cp_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl EngineError {
    /// `true` when the query simply has no route (disconnected graph or
    /// expansion limit), as opposed to bad input.
    pub fn is_no_path(&self) -> bool {
        matches!(self, EngineError::Search(e) if e.is_no_path())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
