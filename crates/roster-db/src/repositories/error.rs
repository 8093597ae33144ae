//! Error handling utilities for repositories

use roster_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::warn;

/// Convert a SQLx error to `DomainError::StoreError`, keeping the store's text
pub fn map_db_error(e: SqlxError) -> DomainError {
    warn!(error = %e, "Store operation failed");
    DomainError::StoreError(e.to_string())
}

/// Map rows into entities, stopping at the first unparseable row
pub fn collect_rows<M, E>(rows: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}
