use thiserror::Error;

/// Failure inside a persistence adapter.
///
/// Services translate these into their own domain errors; store detail
/// never crosses the HTTP boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write. Carries the constraint
    /// name so callers can tell which invariant fired.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(String),
}
