use serde::{Deserialize, Serialize};

/// Closed set of logged activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Calls,
    Messages,
    Email,
    FollowUp,
}

/// Four independent qualification flags captured with each logged batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub budget_validated: bool,
    pub decision_maker_identified: bool,
    pub pain_identified: bool,
    pub deadline_defined: bool,
}

/// One logged batch of sales activity. Immutable after creation; the
/// collection is prepend-only within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineEntry {
    pub id: String,
    pub logged_at: String, // RFC 3339 UTC
    pub role: String,
    pub activity: ActivityKind,
    pub quantity: u32,
    pub time_spent_min: u32,
    pub result: Option<String>,
    pub quality: QualityCheck,
}

/// Draft form values for the routine logger. Reset to defaults after every
/// successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineDraft {
    pub role: String,
    pub activity: ActivityKind,
    pub quantity: u32,
    pub time_spent_min: u32,
    pub result: Option<String>,
    pub quality: QualityCheck,
}

impl Default for RoutineDraft {
    fn default() -> Self {
        RoutineDraft {
            role: "SDR".to_string(),
            activity: ActivityKind::Calls,
            quantity: 1,
            time_spent_min: 10,
            result: None,
            quality: QualityCheck::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_match_form_reset_values() {
        let draft = RoutineDraft::default();
        assert_eq!(draft.role, "SDR");
        assert_eq!(draft.activity, ActivityKind::Calls);
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.time_spent_min, 10);
        assert_eq!(draft.quality, QualityCheck::default());
    }

    #[test]
    fn activity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityKind::FollowUp).expect("serialize");
        assert_eq!(json, "\"follow_up\"");
    }
}
