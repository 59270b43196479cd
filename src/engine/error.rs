//! Error types at the engine boundary.

use crate::store::StoreError;
use thiserror::Error;

/// Errors a command can come back with.
///
/// There is no fatal class here: every variant leaves the engine running and
/// the prior state intact. A failed command is always distinguishable from a
/// successful no-op, because successes return the resulting state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Duplicate or missing id, straight from the store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Producer config rejected before being applied; the previous config is
    /// retained.
    #[error("invalid producer config: {0}")]
    InvalidConfig(String),

    /// Page size outside [`crate::model::PAGE_SIZE_OPTIONS`]; prior page
    /// state is retained.
    #[error("page size {0} is not an allowed option")]
    InvalidPageSize(usize),

    /// The engine task is gone and its channel is closed.
    #[error("engine closed")]
    EngineClosed,

    /// The engine dropped the reply channel mid-request.
    #[error("engine dropped response channel")]
    EngineDropped,
}
