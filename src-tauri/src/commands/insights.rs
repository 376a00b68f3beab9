use crate::insights::generate_executive_insights;
use crate::metrics::activity::total_activities;
use crate::models::funnel::FunnelSnapshot;
use crate::models::insight::Insight;
use crate::models::pdca::PdcaEntry;
use crate::models::routine::RoutineEntry;
use crate::models::state::SharedState;
use std::future::Future;

#[tauri::command]
pub async fn refresh_insights(
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<Insight>, String> {
    let shared = state.inner().clone();

    let (api_key, timeout) = {
        let lock = shared
            .lock()
            .map_err(|_| "State lock error".to_string())?;
        (
            crate::commands::settings::resolve_api_key(&lock.settings),
            crate::commands::settings::request_timeout(&lock.settings),
        )
    };

    try_begin_analysis(&shared)?;

    refresh_insights_internal(&shared, move |funnel, pdca, routines, total| async move {
        generate_executive_insights(&funnel, &pdca, &routines, total, &api_key, timeout).await
    })
    .await
}

/// Advisory in-flight guard: at most one insight request from the UI's point
/// of view. Rejecting here keeps the triggering control honest; the sequence
/// check below protects result ordering even if this gate is bypassed.
pub fn try_begin_analysis(state: &SharedState) -> Result<(), String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    if lock.analyzing {
        return Err("ANALYSIS_IN_PROGRESS: an insight request is already pending".to_string());
    }
    lock.analyzing = true;
    Ok(())
}

/// Issue an insight request against a snapshot of the current data and apply
/// the result once it resolves.
///
/// Each request is stamped with a monotonic sequence number; a response is
/// applied only if its stamp is still the latest, so whatever request was
/// issued last always wins regardless of resolution order. The fetch effect
/// is injected so tests can drive overlap without a network.
pub async fn refresh_insights_internal<F, Fut>(
    state: &SharedState,
    fetch: F,
) -> Result<Vec<Insight>, String>
where
    F: FnOnce(FunnelSnapshot, Vec<PdcaEntry>, Vec<RoutineEntry>, u64) -> Fut,
    Fut: Future<Output = Vec<Insight>>,
{
    let (funnel, pdca, routines, total, seq) = {
        let mut lock = state
            .lock()
            .map_err(|_| "State lock error".to_string())?;
        lock.insight_request_seq += 1;
        let total = total_activities(&lock.routines);
        (
            lock.funnel.clone(),
            lock.pdca.clone(),
            lock.routines.clone(),
            total,
            lock.insight_request_seq,
        )
    };

    log::info!("insight request {seq} issued");
    let insights = fetch(funnel, pdca, routines, total).await;

    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;

    if lock.insight_request_seq == seq {
        lock.insights = insights.clone();
        lock.analyzing = false;
        log::info!("insight request {seq} applied ({} insights)", insights.len());
        Ok(insights)
    } else {
        // A newer request was issued while this one was in flight; its
        // result is the one that counts.
        log::info!("insight request {seq} superseded, result discarded");
        Ok(lock.insights.clone())
    }
}

#[tauri::command]
pub async fn list_insights(state: tauri::State<'_, SharedState>) -> Result<Vec<Insight>, String> {
    list_insights_internal(state.inner())
}

/// Display view of the latest insights, capped by the configured limit. The
/// service may return more; truncation is a presentation concern.
pub fn list_insights_internal(state: &SharedState) -> Result<Vec<Insight>, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    let limit = crate::commands::settings::insight_display_limit(&lock.settings);
    Ok(lock.insights.iter().take(limit).cloned().collect())
}
