use crate::metrics::revenue::{summarize, FunnelSummary};
use crate::models::funnel::FunnelSnapshot;
use crate::models::state::SharedState;

#[tauri::command]
pub async fn update_funnel(
    funnel: FunnelSnapshot,
    state: tauri::State<'_, SharedState>,
) -> Result<FunnelSnapshot, String> {
    update_funnel_internal(state.inner(), funnel)
}

/// Wholesale funnel replacement. Bad numeric input is clamped to 0, never
/// rejected, so the form stays submittable.
pub fn update_funnel_internal(
    state: &SharedState,
    funnel: FunnelSnapshot,
) -> Result<FunnelSnapshot, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    let clean = funnel.sanitized();
    lock.funnel = clean.clone();
    Ok(clean)
}

#[tauri::command]
pub async fn get_funnel_summary(
    state: tauri::State<'_, SharedState>,
) -> Result<FunnelSummary, String> {
    get_funnel_summary_internal(state.inner())
}

pub fn get_funnel_summary_internal(state: &SharedState) -> Result<FunnelSummary, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    Ok(summarize(&lock.funnel, &lock.routines))
}
