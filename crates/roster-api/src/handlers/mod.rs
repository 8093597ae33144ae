//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod departures;
pub mod health;
pub mod members;
pub mod violations;
