//! System health API proxy

use vitals_models::HealthReport;

/// Fetch the composite health report from the backend.
///
/// The report is returned as-is; classification and display fallbacks are
/// the presentation engine's job. A non-success HTTP status is surfaced as
/// an error carrying the status and response body.
pub async fn fetch_system_health() -> Result<HealthReport, anyhow::Error> {
    #[cfg(feature = "mock")]
    {
        Ok(super::mock::mock_health_report())
    }

    #[cfg(not(feature = "mock"))]
    {
        let client = reqwest::Client::new();
        let base = crate::config::get_api_base_url();
        let url = format!("{}/health", base);

        let resp = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!(e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Health request failed ({}): {}",
                status,
                body
            ));
        }

        resp.json().await.map_err(|e| anyhow::anyhow!(e))
    }
}
