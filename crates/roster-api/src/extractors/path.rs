//! Path parameter extractors
//!
//! Record ids are UUIDs; anything else is rejected before reaching the store.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::response::ApiError;

/// Path extractor that reports rejections as API errors
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("Invalid path parameter"))?;

        Ok(IdPath(inner))
    }
}

fn parse_uuid(raw: &str, message: &'static str) -> Result<Uuid, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ApiError::invalid_path(message));
    }
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_path(message))
}

/// Path parameters with member_id
#[derive(Debug, serde::Deserialize)]
pub struct MemberIdPath {
    pub member_id: String,
}

impl MemberIdPath {
    pub fn member_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.member_id, "Invalid member ID")
    }
}

/// Path parameters with violation_id
#[derive(Debug, serde::Deserialize)]
pub struct ViolationIdPath {
    pub violation_id: String,
}

impl ViolationIdPath {
    pub fn violation_id(&self) -> Result<Uuid, ApiError> {
        parse_uuid(&self.violation_id, "Invalid violation ID")
    }
}
