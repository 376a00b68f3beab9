use crate::models::responsibility::{Responsibility, ResponsibilityDraft};
use crate::models::state::SharedState;

#[tauri::command]
pub async fn upsert_responsibility(
    draft: ResponsibilityDraft,
    existing_id: Option<String>,
    state: tauri::State<'_, SharedState>,
) -> Result<Responsibility, String> {
    upsert_responsibility_internal(state.inner(), draft, existing_id)
}

/// Create-or-replace for matrix rows, keyed by id. A known id replaces that
/// row's fields in place (id preserved, collection length unchanged); an
/// unknown or absent id creates a fresh row. Exactly one of the two happens
/// per call.
pub fn upsert_responsibility_internal(
    state: &SharedState,
    draft: ResponsibilityDraft,
    existing_id: Option<String>,
) -> Result<Responsibility, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;

    if let Some(id) = existing_id.filter(|id| !id.is_empty()) {
        if let Some(existing) = lock.responsibilities.iter_mut().find(|r| r.id == id) {
            existing.role = draft.role;
            existing.main_goal = draft.main_goal;
            existing.key_activities = draft.key_activities;
            existing.primary_metric = draft.primary_metric;
            existing.secondary_metric = draft.secondary_metric;
            existing.deliverables = draft.deliverables;
            return Ok(existing.clone());
        }
    }

    let entry = Responsibility {
        id: uuid::Uuid::new_v4().to_string(),
        role: draft.role,
        main_goal: draft.main_goal,
        key_activities: draft.key_activities,
        primary_metric: draft.primary_metric,
        secondary_metric: draft.secondary_metric,
        deliverables: draft.deliverables,
    };
    lock.responsibilities.push(entry.clone());
    Ok(entry)
}

#[tauri::command]
pub async fn list_responsibilities(
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<Responsibility>, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    Ok(lock.responsibilities.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::DashboardState;
    use std::sync::{Arc, Mutex};

    fn draft(role: &str) -> ResponsibilityDraft {
        ResponsibilityDraft {
            role: role.to_string(),
            main_goal: "goal".to_string(),
            key_activities: vec!["activity".to_string()],
            primary_metric: "primary".to_string(),
            secondary_metric: "secondary".to_string(),
            deliverables: vec!["deliverable".to_string()],
        }
    }

    #[test]
    fn absent_id_creates_and_grows_collection() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let before = state.lock().expect("lock").responsibilities.len();

        let created =
            upsert_responsibility_internal(&state, draft("Closer"), None).expect("upsert");

        let lock = state.lock().expect("lock");
        assert_eq!(lock.responsibilities.len(), before + 1);
        assert!(!created.id.is_empty());
        assert_eq!(created.role, "Closer");
    }

    #[test]
    fn unknown_id_creates_rather_than_failing() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let before = state.lock().expect("lock").responsibilities.len();

        let created = upsert_responsibility_internal(
            &state,
            draft("Closer"),
            Some("no-such-id".to_string()),
        )
        .expect("upsert");

        let lock = state.lock().expect("lock");
        assert_eq!(lock.responsibilities.len(), before + 1);
        assert_ne!(created.id, "no-such-id");
    }

    #[test]
    fn known_id_replaces_in_place() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let before = state.lock().expect("lock").responsibilities.len();

        let updated =
            upsert_responsibility_internal(&state, draft("Senior SDR"), Some("1".to_string()))
                .expect("upsert");

        let lock = state.lock().expect("lock");
        assert_eq!(lock.responsibilities.len(), before);
        assert_eq!(updated.id, "1");
        assert_eq!(lock.responsibilities[0].role, "Senior SDR");
        assert_eq!(lock.responsibilities[0].main_goal, "goal");
    }
}
