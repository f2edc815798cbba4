use crate::Result;
use crate::api::{Client, Measure, Project};

/// The server operations the report builder depends on
pub trait MeasureSource {
    /// List the projects carrying `tag`, or all projects when `tag` is `None`
    fn list_projects(&self, tag: Option<&str>) -> impl Future<Output = Result<Vec<Project>>>;

    /// Fetch the measures of `metric_keys` for one batch of projects
    ///
    /// Callers never pass more than [`MAX_BATCH_SIZE`](crate::api::MAX_BATCH_SIZE) project keys.
    fn fetch_measures(&self, project_keys: &[&str], metric_keys: &[&str]) -> impl Future<Output = Result<Vec<Measure>>>;
}

impl MeasureSource for Client {
    async fn list_projects(&self, tag: Option<&str>) -> Result<Vec<Project>> {
        Self::list_projects(self, tag).await
    }

    async fn fetch_measures(&self, project_keys: &[&str], metric_keys: &[&str]) -> Result<Vec<Measure>> {
        Self::fetch_measures(self, project_keys, metric_keys).await
    }
}
