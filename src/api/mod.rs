//! Authenticated access to the SonarQube REST API
//!
//! The [`Client`] wraps the two read operations the report needs: listing projects
//! (optionally filtered by tag) and fetching measures for a batch of projects. Both
//! go through a single call primitive that attaches the page size, authenticates
//! with the user token, and treats any non-200 response as a transport failure.
//!
//! Wire records are deserialized into the typed structures of the `responses`
//! module and converted into [`Project`] and [`Measure`] values before leaving
//! this module.

mod client;
mod responses;

pub use client::Client;

/// Relative path of the project search endpoint
pub const API_PATH_PROJECTS: &str = "components/search_projects";

/// Relative path of the measures search endpoint
pub const API_PATH_MEASURES: &str = "measures/search";

/// Page size attached to every request unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// Largest page size the server accepts
pub const MAX_PAGE_SIZE: usize = 500;

/// Largest number of project keys the measures endpoint accepts in one call
pub const MAX_BATCH_SIZE: usize = 50;

/// A project discovered on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub key: String,
    pub name: Option<String>,

    /// Component qualifier, `TRK` for ordinary projects
    pub qualifier: Option<String>,

    /// `public` or `private`
    pub visibility: Option<String>,
    pub tags: Vec<String>,
    pub analysis_date: Option<String>,
}

impl Project {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            qualifier: None,
            visibility: None,
            tags: Vec::new(),
            analysis_date: None,
        }
    }
}

/// One metric value reported for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    pub project_key: String,
    pub metric_key: String,

    /// Raw value as sent by the server; absent for metrics that only report period values
    pub value: Option<String>,
}

impl Measure {
    #[must_use]
    pub fn new(project_key: impl Into<String>, metric_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            metric_key: metric_key.into(),
            value: Some(value.into()),
        }
    }
}
