use crate::domain::errors::StoreError;

pub mod playlist;
pub mod rating;
pub mod song;
pub mod user;

/// Map a sqlx error to the domain store error, surfacing unique-index
/// violations so callers can turn them into conflicts.
pub(crate) fn map_sqlx_err(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            return StoreError::UniqueViolation(constraint);
        }
    }
    StoreError::Database(e.to_string())
}
