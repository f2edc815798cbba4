//! Wire formats of the SonarQube endpoints
//!
//! Only the fields the report needs are modeled; everything else in the payloads is ignored.

use super::{Measure, Project};
use serde::Deserialize;

/// Response of `components/search_projects`
#[derive(Debug, Deserialize)]
pub struct ProjectSearchResponse {
    #[serde(default)]
    pub paging: Option<Paging>,
    pub components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page_index: u32,
    pub page_size: u32,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub analysis_date: Option<String>,
}

/// Response of `measures/search`
#[derive(Debug, Deserialize)]
pub struct MeasureSearchResponse {
    pub measures: Vec<WireMeasure>,
}

#[derive(Debug, Deserialize)]
pub struct WireMeasure {
    pub component: String,
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<Component> for Project {
    fn from(component: Component) -> Self {
        Self {
            key: component.key,
            name: component.name,
            qualifier: component.qualifier,
            visibility: component.visibility,
            tags: component.tags,
            analysis_date: component.analysis_date,
        }
    }
}

impl From<WireMeasure> for Measure {
    fn from(measure: WireMeasure) -> Self {
        Self {
            project_key: measure.component,
            metric_key: measure.metric,
            value: measure.value,
        }
    }
}
