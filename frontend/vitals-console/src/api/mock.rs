//! Centralized mock data builders for development mode.
//!
//! These helper functions isolate mock construction from real API proxy
//! logic. Extend this module with additional mock responses as needed.
#![cfg(feature = "mock")]

use indexmap::IndexMap;
use vitals_models::{HealthReport, ServiceCheck};

/// Mock composite health report (static examples)
pub fn mock_health_report() -> HealthReport {
    let mut checks = IndexMap::new();
    checks.insert(
        "database".to_string(),
        ServiceCheck {
            status: "Healthy".into(),
            description: Some("Connection pool responsive".into()),
            duration: Some(12.4),
            error: None,
        },
    );
    checks.insert(
        "object-storage".to_string(),
        ServiceCheck {
            status: "Healthy".into(),
            description: Some("Container reachable".into()),
            duration: Some(48.0),
            error: None,
        },
    );
    checks.insert(
        "inference-endpoint".to_string(),
        ServiceCheck {
            status: "Degraded".into(),
            description: Some("Elevated latency".into()),
            duration: Some(812.7),
            error: Some("p99 above threshold".into()),
        },
    );

    HealthReport {
        status: "Degraded".into(),
        timestamp: Some(chrono::Utc::now().to_rfc3339()),
        total_duration: Some(873.1),
        checks,
    }
}
