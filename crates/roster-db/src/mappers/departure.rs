//! Departure model -> entity mapper

use roster_core::entities::Departure;

use crate::models::DepartureModel;

impl From<DepartureModel> for Departure {
    fn from(model: DepartureModel) -> Self {
        Departure {
            id: model.id,
            member_id: model.member_id,
            departure_reason: model.departure_reason,
            departed_at: model.departed_at,
            tenure_days: model.tenure_days,
            created_at: model.created_at,
        }
    }
}
