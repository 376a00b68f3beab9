use serde::{Deserialize, Serialize};

/// Insight classification as requested from (and returned by) the
/// generation service. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Alert,
    Success,
    Suggestion,
}

/// One AI-generated narrative insight. Ephemeral: the whole collection is
/// replaced on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub content: String,
}

impl Insight {
    pub fn alert(title: &str, content: &str) -> Insight {
        Insight {
            kind: InsightKind::Alert,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}
