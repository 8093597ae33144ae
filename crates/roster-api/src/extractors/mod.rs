//! Axum extractors for request handling
//!
//! Custom extractors for validated JSON bodies and id path parameters.

mod path;
mod validated;

pub use path::{IdPath, MemberIdPath, ViolationIdPath};
pub use validated::ValidatedJson;
