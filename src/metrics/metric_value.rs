use super::MetricKind;
use core::fmt;
use strum::{Display, EnumIter, EnumString};

/// A letter rating as computed by the server for reliability, security and maintainability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum Rating {
    A,
    B,
    C,
    D,
    E,
}

impl Rating {
    /// Accepts either the letter or the numeric encoding used on the wire (`1.0` is A, `5.0` is E)
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "A" | "1" | "1.0" => Some(Self::A),
            "B" | "2" | "2.0" => Some(Self::B),
            "C" | "3" | "3.0" => Some(Self::C),
            "D" | "4" | "4.0" => Some(Self::D),
            "E" | "5" | "5.0" => Some(Self::E),
            _ => None,
        }
    }
}

/// Quality gate status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum QualityGateStatus {
    Ok,
    Warn,
    Error,
    #[strum(serialize = "NONE")]
    NoGate,
}

/// The value of one metric for one project
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MetricValue {
    /// The server never reported this metric for the project
    #[default]
    Missing,
    Number(f64),
    Rating(Rating),
    Status(QualityGateStatus),

    /// Free-form value kept exactly as the server sent it
    Text(String),
}

impl MetricValue {
    /// Interpret a raw server value according to the metric kind
    ///
    /// Returns `None` if the value is not valid for the kind.
    #[must_use]
    pub fn parse(kind: MetricKind, raw: &str) -> Option<Self> {
        match kind {
            MetricKind::Count | MetricKind::Percent => raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(Self::Number),
            MetricKind::Rating => Rating::parse(raw.trim()).map(Self::Rating),
            MetricKind::Status => raw.trim().parse::<QualityGateStatus>().ok().map(Self::Status),
            MetricKind::Text => Some(Self::Text(raw.to_string())),
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Formats the value the way it appears in text reports; missing values render as an empty string
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Rating(r) => write!(f, "{r}"),
            Self::Status(s) => write!(f, "{s}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}
