use thiserror::Error;

/// Main error type for query compilation
#[derive(Error, Debug)]
pub enum SquallError {
    /// The sort directive's order token is not `asc`/`desc`, or its target
    /// is not a recognized sort category. Never recovered locally: silently
    /// defaulting would silently change result ordering.
    #[error("unknown sort parameter: {0}")]
    InvalidSortSpecification(String),
}

/// Result type alias for query compilation
pub type Result<T> = std::result::Result<T, SquallError>;
