//! PostgreSQL implementation of DepartureRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{Departure, NewDeparture};
use roster_core::traits::{DepartureRepository, RepoResult};

use crate::models::DepartureModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DepartureRepository
#[derive(Clone)]
pub struct PgDepartureRepository {
    pool: PgPool,
}

impl PgDepartureRepository {
    /// Create a new PgDepartureRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartureRepository for PgDepartureRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Departure>> {
        let rows = sqlx::query_as::<_, DepartureModel>(
            r"
            SELECT id, member_id, departure_reason, departed_at, tenure_days, created_at
            FROM member_departures
            ORDER BY departed_at DESC, created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Departure::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, departure: &NewDeparture) -> RepoResult<Departure> {
        let row = sqlx::query_as::<_, DepartureModel>(
            r"
            INSERT INTO member_departures (member_id, departure_reason, departed_at, tenure_days)
            VALUES ($1, $2, $3, $4)
            RETURNING id, member_id, departure_reason, departed_at, tenure_days, created_at
            ",
        )
        .bind(departure.member_id)
        .bind(&departure.departure_reason)
        .bind(departure.departed_at)
        .bind(departure.tenure_days)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Departure::from(row))
    }
}
