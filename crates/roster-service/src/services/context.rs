//! Service context - dependency container for services
//!
//! Holds the repositories services need. Built once per process and shared
//! through the HTTP state; tests build the same context over the in-memory store.

use std::sync::Arc;

use roster_core::traits::{DepartureRepository, MemberRepository, ViolationRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    violation_repo: Arc<dyn ViolationRepository>,
    departure_repo: Arc<dyn DepartureRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        violation_repo: Arc<dyn ViolationRepository>,
        departure_repo: Arc<dyn DepartureRepository>,
    ) -> Self {
        Self {
            member_repo,
            violation_repo,
            departure_repo,
        }
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the violation repository
    pub fn violation_repo(&self) -> &dyn ViolationRepository {
        self.violation_repo.as_ref()
    }

    /// Get the departure repository
    pub fn departure_repo(&self) -> &dyn DepartureRepository {
        self.departure_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    violation_repo: Option<Arc<dyn ViolationRepository>>,
    departure_repo: Option<Arc<dyn DepartureRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn violation_repo(mut self, repo: Arc<dyn ViolationRepository>) -> Self {
        self.violation_repo = Some(repo);
        self
    }

    pub fn departure_repo(mut self, repo: Arc<dyn DepartureRepository>) -> Self {
        self.departure_repo = Some(repo);
        self
    }

    /// Use one store for all three repositories
    pub fn store<S>(self, store: S) -> Self
    where
        S: MemberRepository + ViolationRepository + DepartureRepository + Clone + 'static,
    {
        self.member_repo(Arc::new(store.clone()))
            .violation_repo(Arc::new(store.clone()))
            .departure_repo(Arc::new(store))
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any repository is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        let missing = |name: &str| super::error::ServiceError::internal(format!("{name} is required"));
        Ok(ServiceContext::new(
            self.member_repo.ok_or_else(|| missing("member_repo"))?,
            self.violation_repo.ok_or_else(|| missing("violation_repo"))?,
            self.departure_repo.ok_or_else(|| missing("departure_repo"))?,
        ))
    }
}
