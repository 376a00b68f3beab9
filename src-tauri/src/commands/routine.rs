use crate::models::routine::{RoutineDraft, RoutineEntry};
use crate::models::state::SharedState;

#[tauri::command]
pub async fn update_routine_draft(
    draft: RoutineDraft,
    state: tauri::State<'_, SharedState>,
) -> Result<RoutineDraft, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    lock.routine_draft = draft.clone();
    Ok(draft)
}

#[tauri::command]
pub async fn log_routine(state: tauri::State<'_, SharedState>) -> Result<RoutineEntry, String> {
    log_routine_internal(state.inner())
}

/// Commit the current draft as an immutable routine entry: fresh id, current
/// UTC timestamp, quantity clamped to at least 1, newest first. The draft
/// resets to its defaults afterwards.
pub fn log_routine_internal(state: &SharedState) -> Result<RoutineEntry, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;

    let draft = lock.routine_draft.clone();
    let entry = RoutineEntry {
        id: uuid::Uuid::new_v4().to_string(),
        logged_at: chrono::Utc::now().to_rfc3339(),
        role: draft.role,
        activity: draft.activity,
        quantity: draft.quantity.max(1),
        time_spent_min: draft.time_spent_min,
        result: draft.result,
        quality: draft.quality,
    };

    lock.routines.insert(0, entry.clone());
    lock.routine_draft = RoutineDraft::default();
    Ok(entry)
}

#[tauri::command]
pub async fn list_routines(
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<RoutineEntry>, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    Ok(lock.routines.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::routine::ActivityKind;
    use crate::models::state::DashboardState;
    use std::sync::{Arc, Mutex};

    #[test]
    fn logging_assigns_id_timestamp_and_resets_draft() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        {
            let mut lock = state.lock().expect("lock");
            lock.routine_draft.activity = ActivityKind::Email;
            lock.routine_draft.quantity = 25;
            lock.routine_draft.quality.pain_identified = true;
        }

        let entry = log_routine_internal(&state).expect("log");
        assert!(!entry.id.is_empty());
        assert!(!entry.logged_at.is_empty());
        assert_eq!(entry.activity, ActivityKind::Email);
        assert_eq!(entry.quantity, 25);
        assert!(entry.quality.pain_identified);

        let lock = state.lock().expect("lock");
        assert_eq!(lock.routines.len(), 1);
        assert_eq!(lock.routine_draft.quantity, 1);
        assert_eq!(lock.routine_draft.activity, ActivityKind::Calls);
        assert!(!lock.routine_draft.quality.pain_identified);
    }

    #[test]
    fn zero_quantity_is_clamped_to_one() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        state.lock().expect("lock").routine_draft.quantity = 0;

        let entry = log_routine_internal(&state).expect("log");
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn entries_are_prepended_and_each_id_is_unique() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let first = log_routine_internal(&state).expect("log");
        let second = log_routine_internal(&state).expect("log");

        let lock = state.lock().expect("lock");
        assert_eq!(lock.routines[0].id, second.id);
        assert_eq!(lock.routines[1].id, first.id);
        assert_ne!(first.id, second.id);
    }
}
