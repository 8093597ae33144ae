//! Violation entity - a rule violation recorded against a member

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::value_objects::ParseEnumError;

/// Whether the violation name comes from the template list or is free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationType {
    Template,
    Custom,
}

impl ViolationType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(Self::Template),
            "custom" => Ok(Self::Custom),
            other => Err(ParseEnumError::new("violation_type", other)),
        }
    }
}

/// Violation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseEnumError::new("severity", other)),
        }
    }
}

/// Predefined violation names offered for `template` violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationTemplate {
    Inactive,
    RuleBreaking,
    ToxicBehavior,
    Spam,
    Cheating,
}

impl ViolationTemplate {
    /// All templates in display order
    pub const ALL: [Self; 5] = [
        Self::Inactive,
        Self::RuleBreaking,
        Self::ToxicBehavior,
        Self::Spam,
        Self::Cheating,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::RuleBreaking => "Rule Breaking",
            Self::ToxicBehavior => "Toxic Behavior",
            Self::Spam => "Spam",
            Self::Cheating => "Cheating",
        }
    }

    /// Look up a template by its exact display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// Violation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub id: Uuid,
    pub member_id: Uuid,
    pub violation_type: ViolationType,
    pub violation_name: String,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    pub severity: Severity,
    pub violation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewViolation {
    pub member_id: Uuid,
    pub violation_type: ViolationType,
    pub violation_name: String,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    pub severity: Severity,
    pub violation_date: NaiveDate,
}
