//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. Every field is
//! optional at the serde level so that absent, `null` and `""` are all
//! reported through the same "Missing required fields" message rather than
//! a deserialization failure.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use roster_core::entities::{
    MemberPatch, MemberStatus, NewMember, NewViolation, Severity, ViolationTemplate, ViolationType,
};
use roster_core::error::DomainError;

const MEMBER_REQUIRED: &str = "nickname, discord_username, roblox_username";
const VIOLATION_REQUIRED: &str = "member_id, violation_type, violation_name";
const DEPARTURE_REQUIRED: &str = "member_id, departure_reason";

/// Treat `""` like an absent value
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn take_present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn require(fields: &'static str, values: &[&Option<String>]) -> Result<(), DomainError> {
    if values.iter().all(|v| present(v).is_some()) {
        Ok(())
    } else {
        Err(DomainError::MissingFields(fields))
    }
}

/// Bridge a domain rule failure into a `validator` schema error
fn to_validation_error(err: DomainError) -> ValidationError {
    ValidationError::new(err.code()).with_message(Cow::Owned(err.to_string()))
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| DomainError::invalid(format!("Invalid {field}: expected YYYY-MM-DD")))
        })
        .transpose()
}

fn parse_member_id(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|_| DomainError::invalid("Invalid member_id"))
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_create_member"))]
pub struct CreateMemberRequest {
    pub nickname: Option<String>,
    pub discord_username: Option<String>,
    pub roblox_username: Option<String>,
    /// `YYYY-MM-DD`; defaults to today
    pub join_date: Option<String>,
}

fn validate_create_member(req: &CreateMemberRequest) -> Result<(), ValidationError> {
    req.check().map_err(to_validation_error)
}

impl CreateMemberRequest {
    fn check(&self) -> Result<(), DomainError> {
        require(
            MEMBER_REQUIRED,
            &[&self.nickname, &self.discord_username, &self.roblox_username],
        )?;
        parse_date("join_date", present(&self.join_date))?;
        Ok(())
    }

    /// Convert into insert values; new members are always active
    pub fn into_new_member(self, today: NaiveDate) -> Result<NewMember, DomainError> {
        self.check()?;
        let join_date = parse_date("join_date", present(&self.join_date))?.unwrap_or(today);

        match (
            take_present(self.nickname),
            take_present(self.discord_username),
            take_present(self.roblox_username),
        ) {
            (Some(nickname), Some(discord_username), Some(roblox_username)) => Ok(NewMember {
                nickname,
                discord_username,
                roblox_username,
                join_date,
                status: MemberStatus::Active,
            }),
            _ => Err(DomainError::MissingFields(MEMBER_REQUIRED)),
        }
    }
}

/// Partial member update request.
///
/// `""` and `null` both mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_member"))]
pub struct UpdateMemberRequest {
    pub nickname: Option<String>,
    pub discord_username: Option<String>,
    pub roblox_username: Option<String>,
    pub status: Option<String>,
}

fn validate_update_member(req: &UpdateMemberRequest) -> Result<(), ValidationError> {
    req.parse_status().map(|_| ()).map_err(to_validation_error)
}

impl UpdateMemberRequest {
    fn parse_status(&self) -> Result<Option<MemberStatus>, DomainError> {
        present(&self.status)
            .map(|s| {
                s.parse::<MemberStatus>()
                    .map_err(|_| DomainError::invalid("Invalid status: expected active or inactive"))
            })
            .transpose()
    }

    pub fn into_patch(self) -> Result<MemberPatch, DomainError> {
        let status = self.parse_status()?;
        Ok(MemberPatch {
            nickname: take_present(self.nickname),
            discord_username: take_present(self.discord_username),
            roblox_username: take_present(self.roblox_username),
            status,
        })
    }
}

// ============================================================================
// Violation Requests
// ============================================================================

/// Create violation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_create_violation"))]
pub struct CreateViolationRequest {
    pub member_id: Option<String>,
    /// `template` or `custom`
    pub violation_type: Option<String>,
    pub violation_name: Option<String>,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    /// `low`, `medium` or `high`; defaults to `medium`
    pub severity: Option<String>,
}

fn validate_create_violation(req: &CreateViolationRequest) -> Result<(), ValidationError> {
    req.clone()
        .into_new_violation(NaiveDate::MIN)
        .map(|_| ())
        .map_err(to_validation_error)
}

impl CreateViolationRequest {
    /// Convert into insert values dated `today`
    pub fn into_new_violation(self, today: NaiveDate) -> Result<NewViolation, DomainError> {
        require(
            VIOLATION_REQUIRED,
            &[&self.member_id, &self.violation_type, &self.violation_name],
        )?;

        let (Some(member_id), Some(violation_type), Some(violation_name)) = (
            take_present(self.member_id),
            take_present(self.violation_type),
            take_present(self.violation_name),
        ) else {
            return Err(DomainError::MissingFields(VIOLATION_REQUIRED));
        };

        let member_id = parse_member_id(&member_id)?;
        let violation_type = violation_type
            .parse::<ViolationType>()
            .map_err(|_| DomainError::invalid("Invalid violation_type: expected template or custom"))?;

        if violation_type == ViolationType::Template
            && ViolationTemplate::from_name(&violation_name).is_none()
        {
            return Err(DomainError::invalid(format!(
                "Unknown violation template: {violation_name}"
            )));
        }

        let severity = present(&self.severity)
            .map(|s| {
                s.parse::<Severity>()
                    .map_err(|_| DomainError::invalid("Invalid severity: expected low, medium or high"))
            })
            .transpose()?
            .unwrap_or_default();

        // Template violations never carry a custom name
        let custom_violation_name = match violation_type {
            ViolationType::Custom => take_present(self.custom_violation_name),
            ViolationType::Template => None,
        };

        Ok(NewViolation {
            member_id,
            violation_type,
            violation_name,
            custom_violation_name,
            description: take_present(self.description),
            severity,
            violation_date: today,
        })
    }
}

// ============================================================================
// Departure Requests
// ============================================================================

/// Create departure request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_create_departure"))]
pub struct CreateDepartureRequest {
    pub member_id: Option<String>,
    pub departure_reason: Option<String>,
    /// `YYYY-MM-DD`; defaults to today
    pub departed_at: Option<String>,
}

fn validate_create_departure(req: &CreateDepartureRequest) -> Result<(), ValidationError> {
    req.parse(NaiveDate::MIN).map(|_| ()).map_err(to_validation_error)
}

/// Validated departure input, before the member's join date is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureInput {
    pub member_id: Uuid,
    pub departure_reason: String,
    pub departed_at: NaiveDate,
}

impl CreateDepartureRequest {
    /// Check required fields and resolve defaults against `today`
    pub fn parse(&self, today: NaiveDate) -> Result<DepartureInput, DomainError> {
        require(DEPARTURE_REQUIRED, &[&self.member_id, &self.departure_reason])?;

        let (Some(member_id), Some(departure_reason)) =
            (present(&self.member_id), present(&self.departure_reason))
        else {
            return Err(DomainError::MissingFields(DEPARTURE_REQUIRED));
        };

        Ok(DepartureInput {
            member_id: parse_member_id(member_id)?,
            departure_reason: departure_reason.to_string(),
            departed_at: parse_date("departed_at", present(&self.departed_at))?.unwrap_or(today),
        })
    }
}
