use crate::models::funnel::FunnelSnapshot;
use crate::models::insight::Insight;
use crate::models::pdca::{PdcaDraft, PdcaEntry, PdcaStatus, RootCause};
use crate::models::responsibility::Responsibility;
use crate::models::routine::{RoutineDraft, RoutineEntry};
use std::sync::{Arc, Mutex};

/// Handle managed by the Tauri runtime and shared with every command.
pub type SharedState = Arc<Mutex<DashboardState>>;

/// In-memory application state. Owned by the Tauri runtime as
/// `Arc<Mutex<DashboardState>>`; every collection has exactly this one owner
/// and nothing here survives the session.
#[derive(Debug)]
pub struct DashboardState {
    pub funnel: FunnelSnapshot,
    pub responsibilities: Vec<Responsibility>,
    pub pdca: Vec<PdcaEntry>,
    pub routines: Vec<RoutineEntry>,
    pub insights: Vec<Insight>,

    pub routine_draft: RoutineDraft,
    pub pdca_draft: PdcaDraft,

    /// Advisory backpressure: true while an insight request is pending.
    pub analyzing: bool,
    /// Monotonic sequence stamped onto each issued insight request. A
    /// response is applied only if its stamp is still the latest, so a slow
    /// early response can never overwrite a later one.
    pub insight_request_seq: u64,

    pub settings: serde_json::Value,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            funnel: FunnelSnapshot {
                leads_generated_mql: 400.0,
                leads_qualified_sql: 120.0,
                opportunities_opps: 45.0,
                closed_sales: 8.0,
                avg_ticket: 5000.0,
                revenue_goal: 60000.0,
            },
            responsibilities: seed_responsibilities(),
            pdca: seed_pdca(),
            routines: Vec::new(),
            insights: Vec::new(),
            routine_draft: RoutineDraft::default(),
            pdca_draft: PdcaDraft::default(),
            analyzing: false,
            insight_request_seq: 0,
            settings: crate::commands::settings::default_settings(),
        }
    }
}

fn seed_responsibilities() -> Vec<Responsibility> {
    vec![
        Responsibility {
            id: "1".to_string(),
            role: "SDR".to_string(),
            main_goal: "Qualify cold leads and book meetings".to_string(),
            key_activities: vec![
                "Outbound prospecting".to_string(),
                "First contact".to_string(),
                "Qualification".to_string(),
            ],
            primary_metric: "Meetings Booked".to_string(),
            secondary_metric: "Qualified Leads".to_string(),
            deliverables: vec!["Weekly meeting pipeline".to_string()],
        },
        Responsibility {
            id: "2".to_string(),
            role: "Account Executive".to_string(),
            main_goal: "Close new business and hit the revenue target".to_string(),
            key_activities: vec![
                "Solution presentation".to_string(),
                "Negotiation".to_string(),
                "Closing".to_string(),
            ],
            primary_metric: "Revenue Sold".to_string(),
            secondary_metric: "Proposal > Sale conversion rate".to_string(),
            deliverables: vec!["Signed contracts".to_string()],
        },
    ]
}

fn seed_pdca() -> Vec<PdcaEntry> {
    vec![PdcaEntry {
        id: "pdca-1".to_string(),
        responsible_name: "J. Manager".to_string(),
        responsible_role: "Sales Manager".to_string(),
        problem: "Low conversion from generated lead to qualified lead".to_string(),
        funnel_stage: "Top of Funnel".to_string(),
        metric_affected: "Qualification Rate".to_string(),
        root_cause: RootCause::Offer,
        action_plan: "Rework the opening script around the ICP's main pain point".to_string(),
        completion_deadline: "10 days".to_string(),
        status: PdcaStatus::InProgress,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_seeds_reference_dataset() {
        let state = DashboardState::default();
        assert_eq!(state.funnel.leads_generated_mql, 400.0);
        assert_eq!(state.responsibilities.len(), 2);
        assert_eq!(state.pdca.len(), 1);
        assert!(state.routines.is_empty());
        assert!(state.insights.is_empty());
        assert!(!state.analyzing);
        assert_eq!(state.insight_request_seq, 0);
    }
}
