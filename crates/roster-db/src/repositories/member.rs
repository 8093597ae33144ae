//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use roster_core::entities::{Member, MemberCounts, MemberPatch, NewMember};
use roster_core::traits::{MemberRepository, RepoResult};

use crate::mappers::counts_from_rows;
use crate::models::{MemberModel, StatusCountModel};

use super::error::{collect_rows, map_db_error};

const MEMBER_COLUMNS: &str =
    "id, nickname, discord_username, roblox_username, join_date, status, created_at, updated_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY join_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let row = sqlx::query_as::<_, MemberModel>(&format!(
            r"
            INSERT INTO members (nickname, discord_username, roblox_username, join_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MEMBER_COLUMNS}
            "
        ))
        .bind(&member.nickname)
        .bind(&member.discord_username)
        .bind(&member.roblox_username)
        .bind(member.join_date)
        .bind(member.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Member::try_from(row)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: Uuid,
        patch: &MemberPatch,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Option<Member>> {
        // NULL binds leave the column as is
        let row = sqlx::query_as::<_, MemberModel>(&format!(
            r"
            UPDATE members
            SET nickname = COALESCE($2, nickname),
                discord_username = COALESCE($3, discord_username),
                roblox_username = COALESCE($4, roblox_username),
                status = COALESCE($5, status),
                updated_at = $6
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "
        ))
        .bind(id)
        .bind(patch.nickname.as_deref())
        .bind(patch.discord_username.as_deref())
        .bind(patch.roblox_username.as_deref())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count_by_status(&self) -> RepoResult<MemberCounts> {
        let rows = sqlx::query_as::<_, StatusCountModel>(
            "SELECT status, COUNT(*) AS count FROM members GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        counts_from_rows(rows)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_db_error)
    }
}
