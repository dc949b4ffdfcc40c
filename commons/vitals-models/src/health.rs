use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Closed classification of a raw status string.
///
/// `Unknown` absorbs everything outside the three known tiers, so downstream
/// code can match exhaustively instead of carrying default branches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Severity {
    Healthy,
    Degraded,
    Unhealthy,
    #[default]
    Unknown,
}

impl Severity {
    /// Classify a raw status string.
    ///
    /// Total over any input: the three known tiers match ASCII
    /// case-insensitively, everything else (absent, empty, unrecognized)
    /// is `Unknown`.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("healthy") => Self::Healthy,
            Some(s) if s.eq_ignore_ascii_case("degraded") => Self::Degraded,
            Some(s) if s.eq_ignore_ascii_case("unhealthy") => Self::Unhealthy,
            _ => Self::Unknown,
        }
    }

    /// Ordering for worst-of aggregation:
    /// Healthy < Degraded < Unhealthy < Unknown.
    pub fn rank(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Degraded => 1,
            Self::Unhealthy => 2,
            Self::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Degraded => "Degraded",
            Self::Unhealthy => "Unhealthy",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite health report as delivered by the backend health endpoint.
///
/// The payload is untrusted and possibly partial: every field defaults, the
/// status string may carry any casing or an unrecognized value, and the
/// timestamp may be absent or unparseable. `checks` keeps the source
/// declaration order of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Total check duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
    /// Per-service results keyed by service name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub checks: IndexMap<String, ServiceCheck>,
}

impl HealthReport {
    /// Severity of the overall report status.
    pub fn severity(&self) -> Severity {
        Severity::classify(Some(&self.status))
    }
}

/// Result of a single registered health check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceCheck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Check duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Failure message reported by the check itself, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceCheck {
    pub fn severity(&self) -> Severity {
        Severity::classify(Some(&self.status))
    }
}
