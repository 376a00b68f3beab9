use crate::models::state::SharedState;
use serde_json::{json, Map, Value};
use std::time::Duration;

const SETTINGS_SCHEMA_VERSION: i64 = 1;

/// Dashboard preferences. Held in memory only: the app deliberately has no
/// on-disk footprint, so settings live and die with the session.
pub fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "insightDisplayLimit": 3,
        "requestTimeoutSecs": 30,
        "language": "en",
        "apiKey": ""
    })
}

#[tauri::command]
pub async fn get_settings(state: tauri::State<'_, SharedState>) -> Result<Value, String> {
    let lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;
    Ok(lock.settings.clone())
}

#[tauri::command]
pub async fn save_settings(
    settings: Value,
    state: tauri::State<'_, SharedState>,
) -> Result<Value, String> {
    save_settings_internal(state.inner(), settings)
}

pub fn save_settings_internal(state: &SharedState, incoming: Value) -> Result<Value, String> {
    let mut lock = state
        .lock()
        .map_err(|_| "State lock error".to_string())?;

    let mut merged = lock.settings.clone();
    merge_settings(&mut merged, &incoming);
    sanitize_settings(&mut merged);

    lock.settings = merged.clone();
    Ok(merged)
}

/// Credential lookup: the apiKey setting wins, then the GEMINI_API_KEY
/// environment variable. Empty means "not configured", which is a valid
/// state the pipeline handles.
pub fn resolve_api_key(settings: &Value) -> String {
    let from_settings = settings
        .get("apiKey")
        .and_then(Value::as_str)
        .unwrap_or("");
    if !from_settings.is_empty() {
        return from_settings.to_string();
    }
    std::env::var("GEMINI_API_KEY").unwrap_or_default()
}

pub fn insight_display_limit(settings: &Value) -> usize {
    settings
        .get("insightDisplayLimit")
        .and_then(Value::as_u64)
        .unwrap_or(3)
        .clamp(1, 10) as usize
}

pub fn request_timeout(settings: &Value) -> Duration {
    let secs = settings
        .get("requestTimeoutSecs")
        .and_then(Value::as_u64)
        .unwrap_or(30)
        .clamp(5, 120);
    Duration::from_secs(secs)
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        *settings = default_settings();
        return;
    };

    clamp_u64(obj, "insightDisplayLimit", 1, 10, 3);
    clamp_u64(obj, "requestTimeoutSecs", 5, 120, 30);
    sanitize_enum(obj, "language", &["en", "pt-BR"], "en");

    let api_key = obj
        .get("apiKey")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    obj.insert("apiKey".to_string(), json!(api_key));

    obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
}

fn clamp_u64(map: &mut Map<String, Value>, key: &str, min: u64, max: u64, default: u64) {
    let raw = map.get(key).and_then(Value::as_u64).unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::DashboardState;
    use std::sync::{Arc, Mutex};

    #[test]
    fn partial_update_merges_without_losing_existing_values() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let saved =
            save_settings_internal(&state, json!({ "insightDisplayLimit": 5 })).expect("save");

        assert_eq!(saved["insightDisplayLimit"], json!(5));
        assert_eq!(saved["requestTimeoutSecs"], json!(30));
        assert_eq!(saved["language"], json!("en"));
    }

    #[test]
    fn sanitize_clamps_and_validates() {
        let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));
        let saved = save_settings_internal(
            &state,
            json!({
                "insightDisplayLimit": 99,
                "requestTimeoutSecs": 1,
                "language": "klingon",
                "apiKey": 42
            }),
        )
        .expect("save");

        assert_eq!(saved["insightDisplayLimit"], json!(10));
        assert_eq!(saved["requestTimeoutSecs"], json!(5));
        assert_eq!(saved["language"], json!("en"));
        assert_eq!(saved["apiKey"], json!(""));
    }

    #[test]
    fn settings_api_key_takes_precedence_over_environment() {
        let settings = json!({ "apiKey": "from-settings" });
        assert_eq!(resolve_api_key(&settings), "from-settings");
    }

    #[test]
    fn display_limit_and_timeout_read_defaults_from_empty_settings() {
        let empty = json!({});
        assert_eq!(insight_display_limit(&empty), 3);
        assert_eq!(request_timeout(&empty), Duration::from_secs(30));
    }
}
