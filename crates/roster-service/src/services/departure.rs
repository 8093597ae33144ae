//! Departure service
//!
//! Logs members leaving the community. Tenure is computed once, at write
//! time, from the member's join date.

use tracing::{info, instrument, warn};

use roster_core::entities::NewDeparture;
use roster_core::value_objects::today;

use crate::dto::mappers::MemberIndex;
use crate::dto::{CreateDepartureRequest, DepartureFeedItem, DepartureResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Departure service
pub struct DepartureService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DepartureService<'a> {
    /// Create a new DepartureService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All departures, most recent first
    #[instrument(skip(self))]
    pub async fn list_departures(&self) -> ServiceResult<Vec<DepartureResponse>> {
        let departures = self.ctx.departure_repo().list().await?;
        Ok(departures.into_iter().map(DepartureResponse::from).collect())
    }

    /// Departures with member nickname, join date and a display tenure
    #[instrument(skip(self))]
    pub async fn departure_feed(&self) -> ServiceResult<Vec<DepartureFeedItem>> {
        let (departures, members) = tokio::try_join!(
            self.ctx.departure_repo().list(),
            self.ctx.member_repo().list()
        )?;

        let index = MemberIndex::new(members);
        Ok(departures
            .into_iter()
            .map(|d| index.departure_item(d))
            .collect())
    }

    /// Record a departure.
    ///
    /// The join-date read and the insert are separate store calls. A member
    /// that cannot be found, is deleted in between, or whose lookup fails
    /// counts as joining today.
    #[instrument(skip(self, request))]
    pub async fn create_departure(
        &self,
        request: CreateDepartureRequest,
    ) -> ServiceResult<DepartureResponse> {
        let today = today();
        let input = request.parse(today)?;

        let join_date = match self.ctx.member_repo().find_by_id(input.member_id).await {
            Ok(member) => member.map(|m| m.join_date),
            Err(e) => {
                warn!(member_id = %input.member_id, error = %e, "Member lookup failed; tenure counted from today");
                None
            }
        };
        if join_date.is_none() {
            warn!(member_id = %input.member_id, "Departure for unknown member; tenure counted from today");
        }

        let new_departure = NewDeparture::new(
            input.member_id,
            input.departure_reason,
            input.departed_at,
            join_date,
        );
        let departure = self.ctx.departure_repo().create(&new_departure).await?;

        info!(
            departure_id = %departure.id,
            member_id = %departure.member_id,
            tenure_days = departure.tenure_days,
            "Departure recorded"
        );

        Ok(DepartureResponse::from(departure))
    }
}
