//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `PmError` via `From` impls, or keep them separate.  Crates whose
//! operations are total by construction (the ledger, the market views)
//! define none.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `pm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PmError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pm-*` crates.
pub type PmResult<T> = Result<T, PmError>;
