//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assessment` - Assessment aggregate, question references and read view
//! - `question` - Externally owned questions, as seen by this service

pub mod assessment;
pub mod foundation;
pub mod question;
