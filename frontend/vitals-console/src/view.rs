//! View-model derivation for the health console.
//!
//! Pure transformation from a raw (possibly partial) `HealthReport` into a
//! render-ready structure. No I/O, no state; every function here is total —
//! malformed input degrades to a fallback value instead of an error.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use vitals_models::{HealthReport, Severity};

/// Shown when a timestamp is absent or unparseable.
pub const FALLBACK_TIMESTAMP: &str = "Just now";
/// Shown when the total duration is absent.
pub const DURATION_UNAVAILABLE: &str = "N/A";
/// Shown when a fetch error carries no message of its own.
pub const ERROR_FALLBACK: &str = "Unable to retrieve system health status";

/// Fixed presentation tokens for one severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: &'static str,
    /// Text color utility classes.
    pub color: &'static str,
    /// Badge background/text utility classes.
    pub badge: &'static str,
}

/// Map a severity to its presentation tokens.
///
/// Exhaustive over the closed enumeration: every severity has exactly one
/// mapping, and the mapping is stable.
pub fn present(severity: Severity) -> StatusPresentation {
    match severity {
        Severity::Healthy => StatusPresentation {
            icon: "✅",
            color: "text-green-600 dark:text-green-400",
            badge: "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        },
        Severity::Degraded => StatusPresentation {
            icon: "⚠️",
            color: "text-yellow-600 dark:text-yellow-400",
            badge: "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200",
        },
        Severity::Unhealthy => StatusPresentation {
            icon: "❌",
            color: "text-red-600 dark:text-red-400",
            badge: "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        },
        Severity::Unknown => StatusPresentation {
            icon: "❓",
            color: "text-gray-600 dark:text-gray-400",
            badge: "bg-gray-100 text-gray-800 dark:bg-gray-900 dark:text-gray-200",
        },
    }
}

/// Format a report timestamp for display in the viewer's local time zone.
///
/// Accepts RFC 3339 first, then a naive ISO-like form treated as UTC.
/// Absent, empty, or unparseable input yields `"Just now"`; no parse
/// failure escapes this function.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return FALLBACK_TIMESTAMP.to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        });

    match parsed {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%b %-d, %Y, %H:%M:%S")
            .to_string(),
        Err(_) => FALLBACK_TIMESTAMP.to_string(),
    }
}

/// Millisecond duration display.
///
/// `Some` whenever the value is present and finite, including zero; `None`
/// otherwise.
pub fn format_duration_ms(ms: Option<f64>) -> Option<String> {
    ms.filter(|v| v.is_finite()).map(|v| format!("{v}ms"))
}

/// Human-readable service name: separator characters become spaces.
pub fn display_name(key: &str) -> String {
    key.replace(['-', '_'], " ")
}

/// Human-readable message for a failed health fetch.
pub fn error_message(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        ERROR_FALLBACK.to_string()
    } else {
        msg
    }
}

/// Render-ready view of one composite health report.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthView {
    pub severity: Severity,
    pub presentation: StatusPresentation,
    /// The raw status string verbatim, or the severity name when empty.
    pub status_label: String,
    pub checked_at: String,
    /// `"{n}ms"` or `"N/A"`.
    pub total_duration: String,
    pub services: Vec<ServiceView>,
}

/// Render-ready view of one per-service entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceView {
    pub name: String,
    pub severity: Severity,
    pub presentation: StatusPresentation,
    pub status_label: String,
    pub description: Option<String>,
    pub error: Option<String>,
    pub duration: Option<String>,
}

fn status_label(raw: &str, severity: Severity) -> String {
    if raw.trim().is_empty() {
        severity.to_string()
    } else {
        raw.to_string()
    }
}

/// Assemble the full view-model from a raw report.
///
/// `None` in, `None` out: with no report the page shows only header and
/// controls. Per-service severities are classified independently of the
/// overall status. Entries follow the report's declaration order; the
/// assembler never sorts or re-ranks them.
pub fn assemble(report: Option<&HealthReport>) -> Option<HealthView> {
    let report = report?;
    let severity = report.severity();

    let services = report
        .checks
        .iter()
        .map(|(name, check)| {
            let check_severity = check.severity();
            ServiceView {
                name: display_name(name),
                severity: check_severity,
                presentation: present(check_severity),
                status_label: status_label(&check.status, check_severity),
                description: check.description.clone(),
                error: check.error.clone(),
                duration: format_duration_ms(check.duration),
            }
        })
        .collect();

    Some(HealthView {
        severity,
        presentation: present(severity),
        status_label: status_label(&report.status, severity),
        checked_at: format_timestamp(report.timestamp.as_deref()),
        total_duration: format_duration_ms(report.total_duration)
            .unwrap_or_else(|| DURATION_UNAVAILABLE.to_string()),
        services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use vitals_models::ServiceCheck;

    const ALL_SEVERITIES: [Severity; 4] = [
        Severity::Healthy,
        Severity::Degraded,
        Severity::Unhealthy,
        Severity::Unknown,
    ];

    fn check(status: &str) -> ServiceCheck {
        ServiceCheck {
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn present_is_total_and_stable() {
        for severity in ALL_SEVERITIES {
            let p = present(severity);
            assert!(!p.icon.is_empty());
            assert!(!p.color.is_empty());
            assert!(!p.badge.is_empty());
            assert_eq!(p, present(severity));
        }
    }

    #[test]
    fn presentations_are_distinct_per_tier() {
        let badges: Vec<_> =
            ALL_SEVERITIES.iter().map(|s| present(*s).badge).collect();
        for (i, a) in badges.iter().enumerate() {
            for b in badges.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn timestamp_falls_back_on_bad_input() {
        assert_eq!(format_timestamp(None), FALLBACK_TIMESTAMP);
        assert_eq!(format_timestamp(Some("")), FALLBACK_TIMESTAMP);
        assert_eq!(format_timestamp(Some("not-a-date")), FALLBACK_TIMESTAMP);
        assert_eq!(
            format_timestamp(Some("2024-13-45T99:99:99Z")),
            FALLBACK_TIMESTAMP
        );
    }

    #[test]
    fn timestamp_renders_parseable_input() {
        let rendered = format_timestamp(Some("2024-01-15T10:30:00Z"));
        assert_ne!(rendered, FALLBACK_TIMESTAMP);
        assert!(rendered.contains("2024"), "got: {rendered}");
    }

    #[test]
    fn timestamp_accepts_naive_iso_form() {
        let rendered = format_timestamp(Some("2024-01-15T10:30:00"));
        assert!(rendered.contains("2024"), "got: {rendered}");
    }

    #[test]
    fn duration_zero_is_display_worthy() {
        assert_eq!(format_duration_ms(Some(0.0)), Some("0ms".to_string()));
    }

    #[test]
    fn duration_hidden_when_absent_or_not_finite() {
        assert_eq!(format_duration_ms(None), None);
        assert_eq!(format_duration_ms(Some(f64::NAN)), None);
        assert_eq!(format_duration_ms(Some(f64::INFINITY)), None);
    }

    #[test]
    fn duration_formats_like_the_wire_value() {
        assert_eq!(format_duration_ms(Some(200.0)), Some("200ms".to_string()));
        assert_eq!(format_duration_ms(Some(50.2)), Some("50.2ms".to_string()));
    }

    #[test]
    fn display_name_replaces_separators() {
        assert_eq!(display_name("db-check"), "db check");
        assert_eq!(display_name("blob_storage"), "blob storage");
        assert_eq!(display_name("plain"), "plain");
    }

    #[test]
    fn error_message_falls_back_when_empty() {
        assert_eq!(error_message(&anyhow::anyhow!("")), ERROR_FALLBACK);
        assert_eq!(error_message(&anyhow::anyhow!("boom")), "boom");
    }

    #[test]
    fn assemble_without_report_is_empty_state() {
        assert_eq!(assemble(None), None);
    }

    #[test]
    fn assemble_classifies_overall_and_services_independently() {
        let mut checks = IndexMap::new();
        checks.insert("db-check".to_string(), check("healthy"));
        let report = HealthReport {
            status: "Degraded".into(),
            checks,
            ..Default::default()
        };

        let hv = assemble(Some(&report)).unwrap();
        assert_eq!(hv.severity, Severity::Degraded);
        assert_eq!(hv.services.len(), 1);
        assert_eq!(hv.services[0].name, "db check");
        assert_eq!(hv.services[0].severity, Severity::Healthy);
    }

    #[test]
    fn assemble_degrades_gracefully_on_empty_report() {
        let hv = assemble(Some(&HealthReport::default())).unwrap();
        assert_eq!(hv.severity, Severity::Unknown);
        assert_eq!(hv.status_label, "Unknown");
        assert_eq!(hv.checked_at, FALLBACK_TIMESTAMP);
        assert_eq!(hv.total_duration, DURATION_UNAVAILABLE);
        assert!(hv.services.is_empty());
    }

    #[test]
    fn assemble_shows_zero_total_duration() {
        let report = HealthReport {
            status: "healthy".into(),
            total_duration: Some(0.0),
            ..Default::default()
        };
        let hv = assemble(Some(&report)).unwrap();
        assert_eq!(hv.total_duration, "0ms");
    }

    #[test]
    fn assemble_keeps_service_order() {
        let mut checks = IndexMap::new();
        checks.insert("zeta-check".to_string(), check("healthy"));
        checks.insert("alpha-check".to_string(), check("unhealthy"));
        let report = HealthReport {
            status: "Unhealthy".into(),
            checks,
            ..Default::default()
        };

        let hv = assemble(Some(&report)).unwrap();
        let names: Vec<&str> =
            hv.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta check", "alpha check"]);
    }

    #[test]
    fn assemble_keeps_raw_status_label() {
        let report = HealthReport {
            status: "HEALTHY".into(),
            ..Default::default()
        };
        let hv = assemble(Some(&report)).unwrap();
        assert_eq!(hv.severity, Severity::Healthy);
        assert_eq!(hv.status_label, "HEALTHY");
    }

    #[test]
    fn assemble_is_deterministic() {
        let mut checks = IndexMap::new();
        checks.insert(
            "db".to_string(),
            ServiceCheck {
                status: "healthy".into(),
                description: Some("ok".into()),
                duration: Some(12.0),
                error: None,
            },
        );
        let report = HealthReport {
            status: "Healthy".into(),
            timestamp: Some("2024-01-15T10:30:00Z".into()),
            total_duration: Some(42.0),
            checks,
        };

        assert_eq!(assemble(Some(&report)), assemble(Some(&report)));
    }
}
