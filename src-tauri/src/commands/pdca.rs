use crate::models::pdca::{PdcaDraft, PdcaEntry, PdcaStatus};
use crate::models::state::SharedState;

#[tauri::command]
pub async fn update_pdca_draft(
    draft: PdcaDraft,
    state: tauri::State<'_, SharedState>,
) -> Result<PdcaDraft, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    lock.pdca_draft = draft.clone();
    Ok(draft)
}

#[tauri::command]
pub async fn add_pdca(state: tauri::State<'_, SharedState>) -> Result<PdcaEntry, String> {
    add_pdca_internal(state.inner())
}

/// Append the current draft as a new corrective action (newest first) and
/// reset the draft to its defaults.
pub fn add_pdca_internal(state: &SharedState) -> Result<PdcaEntry, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;

    let draft = lock.pdca_draft.clone();
    let entry = PdcaEntry {
        id: uuid::Uuid::new_v4().to_string(),
        responsible_name: draft.responsible_name,
        responsible_role: draft.responsible_role,
        problem: draft.problem,
        funnel_stage: draft.funnel_stage,
        metric_affected: draft.metric_affected,
        root_cause: draft.root_cause,
        action_plan: draft.action_plan,
        completion_deadline: draft.completion_deadline,
        status: draft.status,
    };

    lock.pdca.insert(0, entry.clone());
    lock.pdca_draft = PdcaDraft::default();
    Ok(entry)
}

#[tauri::command]
pub async fn list_pdca(
    status: Option<PdcaStatus>,
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<PdcaEntry>, String> {
    list_pdca_internal(state.inner(), status)
}

pub fn list_pdca_internal(
    state: &SharedState,
    status: Option<PdcaStatus>,
) -> Result<Vec<PdcaEntry>, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    Ok(lock
        .pdca
        .iter()
        .filter(|entry| status.map_or(true, |s| entry.status == s))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pdca::RootCause;
    use crate::models::state::DashboardState;
    use std::sync::{Arc, Mutex};

    #[test]
    fn append_assigns_id_prepends_and_resets_draft() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        {
            let mut lock = state.lock().expect("lock");
            lock.pdca_draft.problem = "Slow follow-up cycle".to_string();
            lock.pdca_draft.root_cause = RootCause::People;
            lock.pdca_draft.status = PdcaStatus::InProgress;
        }

        let entry = add_pdca_internal(&state).expect("add");
        assert!(!entry.id.is_empty());
        assert_eq!(entry.problem, "Slow follow-up cycle");

        let lock = state.lock().expect("lock");
        assert_eq!(lock.pdca.len(), 2); // seeded entry + new one
        assert_eq!(lock.pdca[0].id, entry.id);
        assert_eq!(lock.pdca_draft.status, PdcaStatus::Pending);
        assert_eq!(lock.pdca_draft.root_cause, RootCause::Process);
        assert!(lock.pdca_draft.problem.is_empty());
    }

    #[test]
    fn list_filters_by_status() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        state.lock().expect("lock").pdca_draft.status = PdcaStatus::Done;
        add_pdca_internal(&state).expect("add");

        let done = list_pdca_internal(&state, Some(PdcaStatus::Done)).expect("list");
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].status, PdcaStatus::Done);

        let all = list_pdca_internal(&state, None).expect("list");
        assert_eq!(all.len(), 2);
    }
}
