use crate::Result;
use crate::api::{Measure, Project};
use crate::metrics::{MetricDef, MetricValue};
use ohno::IntoAppError;
use std::collections::HashMap;

const LOG_TARGET: &str = "    report";

/// One project's row of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    project: Project,
    values: Vec<MetricValue>,
}

impl ProjectRow {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.project.key
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.project.name.as_deref()
    }

    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.project.qualifier.as_deref()
    }

    #[must_use]
    pub fn visibility(&self) -> Option<&str> {
        self.project.visibility.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.project.tags
    }

    #[must_use]
    pub fn analysis_date(&self) -> Option<&str> {
        self.project.analysis_date.as_deref()
    }

    /// Metric values in catalog order
    #[must_use]
    pub fn values(&self) -> &[MetricValue] {
        &self.values
    }
}

/// Project × metric matrix produced by the report builder
///
/// Rows keep project discovery order and columns keep catalog order. Every row holds
/// exactly one value per catalog metric, [`MetricValue::Missing`] unless the server
/// reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    metrics: Vec<MetricDef>,
    rows: Vec<ProjectRow>,
    row_index: HashMap<String, usize>,
    column_index: HashMap<String, usize>,
}

impl ReportTable {
    /// Create a table with one row per project and every cell missing
    ///
    /// A project key seen more than once keeps its first position but takes the
    /// attributes of its last occurrence.
    pub(crate) fn new(metrics: Vec<MetricDef>, projects: impl IntoIterator<Item = Project>) -> Self {
        let column_index = metrics.iter().enumerate().map(|(i, m)| (m.key.clone(), i)).collect();
        let mut rows: Vec<ProjectRow> = Vec::new();
        let mut row_index: HashMap<String, usize> = HashMap::new();

        for project in projects {
            if let Some(&existing) = row_index.get(&project.key) {
                log::warn!(target: LOG_TARGET, "Project '{}' was listed more than once, keeping the last listing", project.key);
                rows[existing].project = project;
                continue;
            }

            let _ = row_index.insert(project.key.clone(), rows.len());
            rows.push(ProjectRow {
                project,
                values: vec![MetricValue::Missing; metrics.len()],
            });
        }

        Self {
            metrics,
            rows,
            row_index,
            column_index,
        }
    }

    /// Merge one server measure into its cell
    ///
    /// A measure without a value leaves the cell untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the measure names a metric outside the catalog, a project
    /// outside the table, or carries a value that is invalid for the metric
    pub(crate) fn record(&mut self, measure: &Measure) -> Result<()> {
        let column = *self.column_index.get(&measure.metric_key).into_app_err_with(|| {
            format!(
                "server returned a measure for metric '{}' which is not in the metric catalog",
                measure.metric_key
            )
        })?;

        let row = *self.row_index.get(&measure.project_key).into_app_err_with(|| {
            format!(
                "server returned a measure for project '{}' which was not part of the project listing",
                measure.project_key
            )
        })?;

        let Some(raw) = measure.value.as_deref() else {
            log::debug!(
                target: LOG_TARGET,
                "Ignoring measure '{}' for project '{}' because it has no value",
                measure.metric_key,
                measure.project_key
            );
            return Ok(());
        };

        let value = self.metrics[column]
            .parse_value(raw)
            .into_app_err_with(|| format!("recording measures for project '{}'", measure.project_key))?;

        self.rows[row].values[column] = value;
        Ok(())
    }

    /// The metric catalog, which defines the table's columns
    #[must_use]
    pub fn metrics(&self) -> &[MetricDef] {
        &self.metrics
    }

    #[must_use]
    pub fn rows(&self) -> &[ProjectRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project keys in row order
    pub fn project_keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(ProjectRow::key)
    }

    #[must_use]
    pub fn row(&self, project_key: &str) -> Option<&ProjectRow> {
        self.row_index.get(project_key).map(|&i| &self.rows[i])
    }

    /// Value of one cell, or `None` if the project or metric is not part of the table
    #[must_use]
    pub fn value(&self, project_key: &str, metric_key: &str) -> Option<MetricValue> {
        let column = *self.column_index.get(metric_key)?;
        self.row(project_key).map(|row| row.values[column].clone())
    }
}
