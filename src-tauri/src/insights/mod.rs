pub mod client;
pub mod report;

use crate::models::funnel::FunnelSnapshot;
use crate::models::insight::Insight;
use crate::models::pdca::PdcaEntry;
use crate::models::routine::RoutineEntry;
use client::{InsightClient, InsightError};
use std::time::Duration;

/// Generate executive insights from the current in-memory snapshot.
///
/// Never propagates a failure: every error path degrades to exactly one
/// Alert insight the dashboard can render, and the cause is logged. With no
/// API key the function short-circuits before any network activity.
pub async fn generate_executive_insights(
    funnel: &FunnelSnapshot,
    pdca: &[PdcaEntry],
    routines: &[RoutineEntry],
    total_activities: u64,
    api_key: &str,
    timeout: Duration,
) -> Vec<Insight> {
    if api_key.is_empty() {
        log::warn!("insight request skipped: no API key configured");
        return vec![missing_key_alert()];
    }

    let report = report::compose_report(funnel, pdca, routines, total_activities);
    log::debug!("composed insight report ({} chars)", report.len());

    let result = match InsightClient::new(api_key, timeout) {
        Ok(client) => client.generate(&report).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(insights) => insights,
        Err(InsightError::MissingApiKey) => vec![missing_key_alert()],
        Err(e) => {
            log::warn!("insight generation failed: {e}");
            vec![Insight::alert(
                "Analysis Unavailable",
                "Automatic insights could not be generated right now due to an \
                 error reaching the AI service.",
            )]
        }
    }
}

fn missing_key_alert() -> Insight {
    Insight::alert(
        "Configuration Required",
        "No Gemini API key was detected. Set GEMINI_API_KEY (or the apiKey \
         setting) to enable executive insights.",
    )
}
