//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the store, and the
//! infrastructure layer provides the implementation. Identifiers and
//! timestamps on inserted rows are assigned by the store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Departure, Member, MemberCounts, MemberPatch, NewDeparture, NewMember, NewViolation, Violation,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members, newest join date first
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>>;

    /// Insert a member and return the stored row
    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Apply a partial update. Returns `None` when no row matched.
    async fn update(
        &self,
        id: Uuid,
        patch: &MemberPatch,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Member>>;

    /// Hard delete; returns the number of rows removed
    async fn delete(&self, id: Uuid) -> RepoResult<u64>;

    /// Count members by status
    async fn count_by_status(&self) -> RepoResult<MemberCounts>;

    /// Check the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Violation Repository
// ============================================================================

#[async_trait]
pub trait ViolationRepository: Send + Sync {
    /// List all violations, most recent violation date first
    async fn list(&self) -> RepoResult<Vec<Violation>>;

    /// Insert a violation and return the stored row
    async fn create(&self, violation: &NewViolation) -> RepoResult<Violation>;

    /// Delete by ID; returns the number of rows removed
    async fn delete(&self, id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Departure Repository
// ============================================================================

#[async_trait]
pub trait DepartureRepository: Send + Sync {
    /// List all departures, most recent departure first
    async fn list(&self) -> RepoResult<Vec<Departure>>;

    /// Insert a departure and return the stored row
    async fn create(&self, departure: &NewDeparture) -> RepoResult<Departure>;
}
