use thiserror::Error;

// One policy for every operation: missing recipes and ingredients are
// reported, never swallowed.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AmbiguousMatch(String),
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    Storage(String)
}
