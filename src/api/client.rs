//! SonarQube API client
//!
//! Minimal client for the project search and measures search endpoints.

use super::responses::{MeasureSearchResponse, ProjectSearchResponse};
use super::{API_PATH_MEASURES, API_PATH_PROJECTS, MAX_BATCH_SIZE, MAX_PAGE_SIZE, Measure, Project};
use crate::Result;
use ohno::{IntoAppError, bail};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "       api";

/// SonarQube API client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
    user_token: String,
    page_size: usize,
}

impl Client {
    /// Create a new client for the server at `api_base`, authenticating with `user_token`
    ///
    /// Endpoint paths are resolved beneath `api_base`, so a missing trailing `/` is added.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid, the page size is out of range,
    /// or the HTTP client cannot be created
    pub fn new(api_base: &str, user_token: impl Into<String>, page_size: usize) -> Result<Self> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            bail!("page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}");
        }

        let mut base = api_base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url = Url::parse(&base).into_app_err_with(|| format!("invalid SonarQube API base URL '{api_base}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("invalid SonarQube API base URL '{api_base}'");
        }

        let client = reqwest::Client::builder().user_agent("sonar-report").build()?;

        Ok(Self {
            client,
            base_url,
            user_token: user_token.into(),
            page_size,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// List the projects visible to the user, optionally restricted to those tagged with `tag`
    ///
    /// Only the first page of results is retrieved.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn list_projects(&self, tag: Option<&str>) -> Result<Vec<Project>> {
        let filter = tag.filter(|t| !t.is_empty()).map(|t| format!("tags = {t}"));

        let mut params = vec![("f", "analysisDate")];
        if let Some(filter) = &filter {
            params.push(("filter", filter.as_str()));
        }

        let response: ProjectSearchResponse = self.api_call(API_PATH_PROJECTS, &params).await?;

        if let Some(paging) = &response.paging
            && paging.total > response.components.len()
        {
            log::warn!(
                target: LOG_TARGET,
                "Server reports {} projects but page {} (size {}) only holds {}, the report will be incomplete",
                paging.total,
                paging.page_index,
                paging.page_size,
                response.components.len()
            );
        }

        Ok(response.components.into_iter().map(Project::from).collect())
    }

    /// Fetch the measures of `metric_keys` for a batch of at most [`MAX_BATCH_SIZE`] projects
    ///
    /// # Errors
    ///
    /// Returns an error if either key set is empty, the batch is too large, the request fails,
    /// or the response cannot be parsed
    pub async fn fetch_measures(&self, project_keys: &[&str], metric_keys: &[&str]) -> Result<Vec<Measure>> {
        if project_keys.is_empty() {
            bail!("at least one project key is required to fetch measures");
        }

        if project_keys.len() > MAX_BATCH_SIZE {
            bail!(
                "cannot fetch measures for {} projects at once, the server accepts at most {MAX_BATCH_SIZE}",
                project_keys.len()
            );
        }

        if metric_keys.is_empty() {
            bail!("at least one metric key is required to fetch measures");
        }

        let projects = project_keys.join(",");
        let metrics = metric_keys.join(",");
        let params = [("projectKeys", projects.as_str()), ("metricKeys", metrics.as_str())];

        let response: MeasureSearchResponse = self.api_call(API_PATH_MEASURES, &params).await?;
        Ok(response.measures.into_iter().map(Measure::from).collect())
    }

    /// Make an authenticated GET request and parse the JSON body
    ///
    /// Any status other than 200 is reported as a failed request, without retrying.
    async fn api_call<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.base_url.join(path).into_app_err_with(|| format!("building URL for endpoint '{path}'"))?;
        let page_size = self.page_size.to_string();

        log::debug!(target: LOG_TARGET, "GET {url}");

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .query(&[("ps", page_size.as_str())])
            .basic_auth(&self.user_token, Some(""))
            .send()
            .await
            .into_app_err_with(|| format!("API request failed: could not reach '{url}'"))?;

        let status = response.status();
        if status != StatusCode::OK {
            bail!("API request failed: '{url}' returned HTTP {status}");
        }

        response
            .json::<T>()
            .await
            .into_app_err_with(|| format!("parsing response from '{url}'"))
    }
}
