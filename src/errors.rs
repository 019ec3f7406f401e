use thiserror::Error;

use crate::rejection::Rejection;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by predicates themselves, e.g. a failed user lookup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// A predicate denied access. This is the designed rejection path,
    /// not an internal failure.
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// The predicate itself failed before producing a decision. The source
    /// is carried unchanged for the host pipeline to map.
    #[error("{0}")]
    Predicate(BoxError),
}
