//! Violation model -> entity mapper

use roster_core::entities::{Severity, Violation, ViolationType};
use roster_core::error::DomainError;

use crate::models::ViolationModel;

impl TryFrom<ViolationModel> for Violation {
    type Error = DomainError;

    fn try_from(model: ViolationModel) -> Result<Self, Self::Error> {
        let violation_type = model
            .violation_type
            .parse::<ViolationType>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;
        let severity = model
            .severity
            .parse::<Severity>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(Violation {
            id: model.id,
            member_id: model.member_id,
            violation_type,
            violation_name: model.violation_name,
            custom_violation_name: model.custom_violation_name,
            description: model.description,
            severity,
            violation_date: model.violation_date,
            created_at: model.created_at,
        })
    }
}
