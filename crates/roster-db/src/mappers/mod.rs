//! Model to entity mappers
//!
//! Rows store enums as text; converting a row into an entity parses those
//! columns and fails with `DomainError::InternalError` on unknown values.

mod departure;
mod member;
mod violation;

pub use member::counts_from_rows;
