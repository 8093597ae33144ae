//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found")]
    MemberNotFound,

    #[error("Violation record not found")]
    ViolationNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Required fields absent, null or empty; carries the enumerated field list
    #[error("Missing required fields: {0}")]
    MissingFields(&'static str),

    #[error("{0}")]
    InvalidField(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Failure reported by the backing store, message kept verbatim
    #[error("{0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create an invalid-field error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::ViolationNotFound => "UNKNOWN_VIOLATION",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::StoreError(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound | Self::ViolationNotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields(_) | Self::InvalidField(_))
    }

    /// Check if this error came from the store
    pub fn is_store(&self) -> bool {
        matches!(self, Self::StoreError(_))
    }
}
