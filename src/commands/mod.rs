//! Command-line interface and orchestration for sonar-report
//!
//! This module parses the command line, loads the configuration, and drives the
//! end-to-end workflow:
//!
//! 1. Load the metric catalog and request limits, either the embedded defaults or a
//!    user-supplied TOML file
//! 2. Build an authenticated API client for the SonarQube server
//! 3. Collect a report table through [`crate::report::ReportBuilder`]
//! 4. Serialize the table through [`crate::writers`]
//!
//! The `common` module provides logging setup shared by the commands.

mod common;
mod config;
mod host;
mod run;

pub use common::LogLevel;
pub use config::{Config, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use run::run;
