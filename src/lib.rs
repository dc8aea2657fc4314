//! Assessment Service - CRUD API for assessments built from question references
//!
//! Assessments are owned by a user and a project and hold an ordered list of
//! references to questions managed elsewhere. Reads resolve those references
//! into full question documents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
