use serde::Deserialize;
use strum::{Display, EnumIter};

/// How the server-side string value of a metric is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricKind {
    /// A whole number such as a bug count or lines of code
    Count,

    /// A percentage such as coverage or duplication density
    Percent,

    /// A letter rating from A to E, transmitted as `1.0` through `5.0`
    Rating,

    /// A quality gate status such as `OK` or `ERROR`
    Status,

    /// Free-form data such as a language distribution, written through unchanged
    Text,
}
