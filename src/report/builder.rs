use super::{MeasureSource, ReportTable};
use crate::Result;
use crate::api::MAX_BATCH_SIZE;
use crate::metrics::MetricDef;
use ohno::bail;
use std::time::Instant;

const LOG_TARGET: &str = "    report";

/// Builds a [`ReportTable`] from a [`MeasureSource`]
#[derive(Debug)]
pub struct ReportBuilder<S> {
    source: S,
    metrics: Vec<MetricDef>,
    batch_size: usize,
}

impl<S: MeasureSource> ReportBuilder<S> {
    /// Create a builder requesting `metrics` for at most `batch_size` projects per call
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or the batch size is outside `1..=MAX_BATCH_SIZE`
    pub fn new(source: S, metrics: Vec<MetricDef>, batch_size: usize) -> Result<Self> {
        if metrics.is_empty() {
            bail!("the metric catalog must contain at least one metric");
        }

        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            bail!("batch size must be between 1 and {MAX_BATCH_SIZE}, got {batch_size}");
        }

        Ok(Self {
            source,
            metrics,
            batch_size,
        })
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn metrics(&self) -> &[MetricDef] {
        &self.metrics
    }

    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Collect the full report for the projects carrying `tag`
    ///
    /// Batches are fetched strictly one after the other. The table is returned only
    /// once every batch has been merged.
    ///
    /// # Errors
    ///
    /// Returns an error if listing projects or fetching any batch fails, or if the
    /// server returns a measure that does not fit the table
    pub async fn get_project_report(&self, tag: Option<&str>) -> Result<ReportTable> {
        let start_time = Instant::now();

        let projects = self.source.list_projects(tag).await?;
        match tag {
            Some(tag) => log::info!(target: LOG_TARGET, "Found {} project(s) tagged '{tag}'", projects.len()),
            None => log::info!(target: LOG_TARGET, "Found {} project(s)", projects.len()),
        }

        let mut table = ReportTable::new(self.metrics.clone(), projects);

        let metric_keys: Vec<&str> = self.metrics.iter().map(|m| m.key.as_str()).collect();
        let project_keys: Vec<String> = table.project_keys().map(str::to_string).collect();
        let batch_count = project_keys.len().div_ceil(self.batch_size);

        for (batch_index, batch) in project_keys.chunks(self.batch_size).enumerate() {
            let keys: Vec<&str> = batch.iter().map(String::as_str).filter(|k| !k.is_empty()).collect();
            if keys.is_empty() {
                continue;
            }

            log::info!(
                target: LOG_TARGET,
                "Fetching measures for batch {} of {batch_count} ({} project(s))",
                batch_index + 1,
                keys.len()
            );

            let measures = self.source.fetch_measures(&keys, &metric_keys).await?;

            log::debug!(target: LOG_TARGET, "Batch {} returned {} measure(s)", batch_index + 1, measures.len());

            for measure in &measures {
                table.record(measure)?;
            }
        }

        log::info!(
            target: LOG_TARGET,
            "Finished collecting measures for {} project(s) in {:.3}s",
            table.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(table)
    }
}
