//! The metric catalog and typed metric values
//!
//! Every report column corresponds to one [`MetricDef`] from the catalog. The catalog
//! is static configuration: it is loaded once at startup and is the complete set of
//! metrics requested from the server and written to the report.
//!
//! The server transmits every measure value as a string. [`MetricKind`] tells how a
//! given metric's string should be interpreted, and [`MetricValue`] holds the result,
//! with [`MetricValue::Missing`] standing in for any metric the server never reported.

mod metric_def;
mod metric_kind;
mod metric_value;

pub use metric_def::MetricDef;
pub use metric_kind::MetricKind;
pub use metric_value::{MetricValue, QualityGateStatus, Rating};
