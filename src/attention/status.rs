use serde::{Deserialize, Serialize};

/// Current attentiveness reading for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttentionStatus {
    /// Whether the reader is currently deemed attentive.
    pub is_attentive: bool,
    /// Last successfully classified dominant emotion. Stays stale when a
    /// classification attempt fails.
    pub last_emotion: Option<String>,
    /// Seconds since a face was last located; 0.0 the instant one is.
    pub time_without_face: f64,
}

impl Default for AttentionStatus {
    fn default() -> Self {
        Self {
            is_attentive: true,
            last_emotion: None,
            time_without_face: 0.0,
        }
    }
}
