//! In-memory store
//!
//! A process-local implementation of every repository trait, used by service,
//! router and end-to-end tests, and by local runs without PostgreSQL.
//!
//! # Features
//!
//! - **Same ordering as PostgreSQL**: lists sort by their date column, newest first
//! - **Failure injection**: make every call fail with a given store message
//! - **Cheap clones**: clones share the same tables

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use roster_core::entities::{
    Departure, Member, MemberCounts, MemberPatch, NewDeparture, NewMember, NewViolation, Violation,
};
use roster_core::error::DomainError;
use roster_core::traits::{DepartureRepository, MemberRepository, RepoResult, ViolationRepository};

#[derive(Default)]
struct Tables {
    members: RwLock<Vec<Member>>,
    violations: RwLock<Vec<Violation>>,
    departures: RwLock<Vec<Departure>>,
    failure: RwLock<Option<String>>,
}

/// Shared in-memory tables implementing all three repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreError(message)`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.tables.failure.write() = Some(message.into());
    }

    /// Stop injecting failures
    pub fn clear_failure(&self) {
        *self.tables.failure.write() = None;
    }

    pub fn member_count(&self) -> usize {
        self.tables.members.read().len()
    }

    pub fn violation_count(&self) -> usize {
        self.tables.violations.read().len()
    }

    pub fn departure_count(&self) -> usize {
        self.tables.departures.read().len()
    }

    fn check(&self) -> RepoResult<()> {
        match self.tables.failure.read().as_ref() {
            Some(message) => {
                debug!(%message, "Injected store failure");
                Err(DomainError::StoreError(message.clone()))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Member>> {
        self.check()?;
        let mut members = self.tables.members.read().clone();
        // Stable sort keeps insertion order among exact ties
        members.sort_by(|a, b| {
            b.join_date
                .cmp(&a.join_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(members)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        self.check()?;
        Ok(self
            .tables
            .members
            .read()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        self.check()?;
        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            nickname: member.nickname.clone(),
            discord_username: member.discord_username.clone(),
            roblox_username: member.roblox_username.clone(),
            join_date: member.join_date,
            status: member.status,
            created_at: now,
            updated_at: now,
        };
        self.tables.members.write().push(member.clone());
        Ok(member)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &MemberPatch,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Member>> {
        self.check()?;
        let mut members = self.tables.members.write();
        Ok(members.iter_mut().find(|m| m.id == id).map(|member| {
            member.apply(patch, updated_at);
            member.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> RepoResult<u64> {
        self.check()?;
        let mut members = self.tables.members.write();
        let before = members.len();
        members.retain(|m| m.id != id);
        Ok((before - members.len()) as u64)
    }

    async fn count_by_status(&self) -> RepoResult<MemberCounts> {
        self.check()?;
        Ok(MemberCounts::tally(&self.tables.members.read()))
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check()
    }
}

#[async_trait]
impl ViolationRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Violation>> {
        self.check()?;
        let mut violations = self.tables.violations.read().clone();
        violations.sort_by(|a, b| {
            b.violation_date
                .cmp(&a.violation_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(violations)
    }

    async fn create(&self, violation: &NewViolation) -> RepoResult<Violation> {
        self.check()?;
        let violation = Violation {
            id: Uuid::new_v4(),
            member_id: violation.member_id,
            violation_type: violation.violation_type,
            violation_name: violation.violation_name.clone(),
            custom_violation_name: violation.custom_violation_name.clone(),
            description: violation.description.clone(),
            severity: violation.severity,
            violation_date: violation.violation_date,
            created_at: Utc::now(),
        };
        self.tables.violations.write().push(violation.clone());
        Ok(violation)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<u64> {
        self.check()?;
        let mut violations = self.tables.violations.write();
        let before = violations.len();
        violations.retain(|v| v.id != id);
        Ok((before - violations.len()) as u64)
    }
}

#[async_trait]
impl DepartureRepository for InMemoryStore {
    async fn list(&self) -> RepoResult<Vec<Departure>> {
        self.check()?;
        let mut departures = self.tables.departures.read().clone();
        departures.sort_by(|a, b| {
            b.departed_at
                .cmp(&a.departed_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(departures)
    }

    async fn create(&self, departure: &NewDeparture) -> RepoResult<Departure> {
        self.check()?;
        let departure = Departure {
            id: Uuid::new_v4(),
            member_id: departure.member_id,
            departure_reason: departure.departure_reason.clone(),
            departed_at: departure.departed_at,
            tenure_days: departure.tenure_days,
            created_at: Utc::now(),
        };
        self.tables.departures.write().push(departure.clone());
        Ok(departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_core::entities::{MemberStatus, Severity, ViolationType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_member(nickname: &str, join_date: NaiveDate) -> NewMember {
        NewMember {
            nickname: nickname.to_string(),
            discord_username: format!("{nickname}_dc"),
            roblox_username: format!("{nickname}_rbx"),
            join_date,
            status: MemberStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_members_listed_by_join_date_desc() {
        let store = InMemoryStore::new();
        MemberRepository::create(&store, &new_member("b", date(2024, 2, 1))).await.unwrap();
        MemberRepository::create(&store, &new_member("c", date(2024, 3, 1))).await.unwrap();
        MemberRepository::create(&store, &new_member("a", date(2024, 1, 1))).await.unwrap();

        let names: Vec<_> = MemberRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.nickname)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_update_missing_member_returns_none() {
        let store = InMemoryStore::new();
        let result = store
            .update(Uuid::new_v4(), &MemberPatch::default(), Utc::now())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let store = InMemoryStore::new();
        let member = MemberRepository::create(&store, &new_member("nova", date(2024, 1, 1)))
            .await
            .unwrap();
        let patch = MemberPatch {
            status: Some(MemberStatus::Inactive),
            ..Default::default()
        };
        let later = member.updated_at + chrono::Duration::seconds(2);

        let updated = store.update(member.id, &patch, later).await.unwrap().unwrap();
        assert_eq!(updated.status, MemberStatus::Inactive);
        assert_eq!(updated.nickname, "nova");
        assert_eq!(updated.updated_at, later);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_removed() {
        let store = InMemoryStore::new();
        let violation = ViolationRepository::create(
            &store,
            &NewViolation {
                member_id: Uuid::new_v4(),
                violation_type: ViolationType::Custom,
                violation_name: "Griefing".to_string(),
                custom_violation_name: Some("Griefing".to_string()),
                description: None,
                severity: Severity::High,
                violation_date: date(2024, 1, 1),
            },
        )
        .await
        .unwrap();

        assert_eq!(ViolationRepository::delete(&store, Uuid::new_v4()).await.unwrap(), 0);
        assert_eq!(store.violation_count(), 1);
        assert_eq!(ViolationRepository::delete(&store, violation.id).await.unwrap(), 1);
        assert_eq!(store.violation_count(), 0);
    }

    #[tokio::test]
    async fn test_counts_by_status() {
        let store = InMemoryStore::new();
        let mut inactive = new_member("x", date(2024, 1, 1));
        inactive.status = MemberStatus::Inactive;
        MemberRepository::create(&store, &new_member("a", date(2024, 1, 1))).await.unwrap();
        MemberRepository::create(&store, &inactive).await.unwrap();

        let counts = store.count_by_status().await.unwrap();
        assert_eq!(counts, MemberCounts { active: 1, inactive: 1 });
    }

    #[tokio::test]
    async fn test_injected_failure_surfaces_message() {
        let store = InMemoryStore::new();
        store.fail_with("relation \"members\" does not exist");

        let err = MemberRepository::list(&store).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::StoreError(ref msg) if msg == "relation \"members\" does not exist"
        ));
        assert!(store.ping().await.is_err());

        store.clear_failure();
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();
        MemberRepository::create(&store, &new_member("a", date(2024, 1, 1))).await.unwrap();
        assert_eq!(other.member_count(), 1);
    }
}
