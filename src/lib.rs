#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for sonar-report
//!
//! This library retrieves code-quality metrics for a set of projects from a SonarQube
//! server, merges the per-project measures into a single table, and exports it.
//!
//! # Module Organization
//!
//! - [`api`]: Authenticated access to the SonarQube REST API
//! - [`metrics`]: The tracked metric catalog and typed metric values
//! - [`report`]: Batched retrieval and merging of measures into a report table
//! - [`writers`]: CSV and Excel serialization of a finished report table
//! - [`commands`]: Command-line interface and orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod api;
pub mod commands;
pub mod metrics;
pub mod report;
pub mod writers;

pub use crate::commands::{Host, run};
