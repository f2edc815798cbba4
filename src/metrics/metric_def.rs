use super::{MetricKind, MetricValue};
use crate::Result;
use ohno::IntoAppError;
use serde::Deserialize;

/// One entry of the metric catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDef {
    /// Server-side metric key, also used as the report column header
    pub key: String,

    /// Human-readable explanation of the metric
    #[serde(default)]
    pub description: String,

    pub kind: MetricKind,
}

impl MetricDef {
    #[must_use]
    pub fn new(key: impl Into<String>, description: impl Into<String>, kind: MetricKind) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            kind,
        }
    }

    /// Interpret a raw server value according to this metric's kind
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not valid for the metric's kind
    pub fn parse_value(&self, raw: &str) -> Result<MetricValue> {
        MetricValue::parse(self.kind, raw)
            .into_app_err_with(|| format!("invalid {} value '{raw}' for metric '{}'", self.kind, self.key))
    }
}
