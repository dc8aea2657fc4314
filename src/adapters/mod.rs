//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum router and REST handlers
//! - `memory` - Process-local stores for tests and local runs
//! - `postgres` - sqlx-backed stores

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryAssessmentStore, InMemoryQuestionStore};
pub use postgres::{PostgresAssessmentReader, PostgresAssessmentRepository, PostgresQuestionReader};
