//! Errors produced while fetching listings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("listing store unreachable: {0}")]
    Transport(String),
    #[error("listing store answered {status}: {message}")]
    Server { status: u16, message: String },
    #[error("listing not found: {0}")]
    NotFound(String),
}
