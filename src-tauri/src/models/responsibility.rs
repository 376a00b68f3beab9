use serde::{Deserialize, Serialize};

/// A role definition in the responsibility matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responsibility {
    pub id: String,
    pub role: String,
    pub main_goal: String,
    pub key_activities: Vec<String>,
    pub primary_metric: String,
    pub secondary_metric: String,
    pub deliverables: Vec<String>,
}

/// Draft fields for creating or editing a matrix row. The id is assigned by
/// the upsert operation, never by the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponsibilityDraft {
    pub role: String,
    pub main_goal: String,
    #[serde(default)]
    pub key_activities: Vec<String>,
    pub primary_metric: String,
    pub secondary_metric: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}
