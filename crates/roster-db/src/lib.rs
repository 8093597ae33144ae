//! # roster-db
//!
//! Storage layer implementing the repository traits from `roster-core`.
//!
//! ## Overview
//!
//! - Connection pool management and SQL migrations
//! - Row models with SQLx `FromRow` derives
//! - Row ↔ entity mappers
//! - PostgreSQL repository implementations
//! - [`memory::InMemoryStore`], a process-local store used by tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::{create_pool, DatabaseConfig};
//! use roster_db::PgMemberRepository;
//! use roster_core::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/roster");
//!     let pool = create_pool(&config).await?;
//!     let members = PgMemberRepository::new(pool);
//!     let all = members.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgDepartureRepository, PgMemberRepository, PgViolationRepository};
