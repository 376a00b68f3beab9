use serde::{Deserialize, Serialize};

/// Root-cause category for a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootCause {
    People,
    Process,
    Tool,
    Offer,
}

/// Completion status. Only field expected to transition after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdcaStatus {
    Pending,
    InProgress,
    Done,
}

/// One Plan-Do-Check-Act corrective-action record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdcaEntry {
    pub id: String,
    pub responsible_name: String,
    pub responsible_role: String,
    pub problem: String,
    pub funnel_stage: String,
    pub metric_affected: String,
    pub root_cause: RootCause,
    pub action_plan: String,
    pub completion_deadline: String, // free text, e.g. "10 days"
    pub status: PdcaStatus,
}

/// Draft form values for a new PDCA entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdcaDraft {
    pub responsible_name: String,
    pub responsible_role: String,
    pub problem: String,
    pub funnel_stage: String,
    pub metric_affected: String,
    pub root_cause: RootCause,
    pub action_plan: String,
    pub completion_deadline: String,
    pub status: PdcaStatus,
}

impl Default for PdcaDraft {
    fn default() -> Self {
        PdcaDraft {
            responsible_name: String::new(),
            responsible_role: "Sales Manager".to_string(),
            problem: String::new(),
            funnel_stage: "Top of Funnel".to_string(),
            metric_affected: String::new(),
            root_cause: RootCause::Process,
            action_plan: String::new(),
            completion_deadline: String::new(),
            status: PdcaStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_to_pending_process() {
        let draft = PdcaDraft::default();
        assert_eq!(draft.status, PdcaStatus::Pending);
        assert_eq!(draft.root_cause, RootCause::Process);
        assert_eq!(draft.responsible_role, "Sales Manager");
    }

    #[test]
    fn status_round_trips_through_json() {
        let json = serde_json::to_string(&PdcaStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in_progress\"");
        let back: PdcaStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, PdcaStatus::InProgress);
    }
}
