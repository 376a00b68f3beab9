pub mod commands;
pub mod insights;
pub mod metrics;
pub mod models;

use commands::{
    funnel::{get_funnel_summary, update_funnel},
    insights::{list_insights, refresh_insights},
    matrix::{list_responsibilities, upsert_responsibility},
    pdca::{add_pdca, list_pdca, update_pdca_draft},
    routine::{list_routines, log_routine, update_routine_draft},
    settings::{get_settings, save_settings},
};
use models::state::{DashboardState, SharedState};
use std::sync::{Arc, Mutex};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state: SharedState = Arc::new(Mutex::new(DashboardState::default()));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            update_funnel,
            get_funnel_summary,
            update_routine_draft,
            log_routine,
            list_routines,
            update_pdca_draft,
            add_pdca,
            list_pdca,
            upsert_responsibility,
            list_responsibilities,
            refresh_insights,
            list_insights,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
