use std::time::Duration;

/// Tunable thresholds for a reading session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Continuous face absence after which the reader is deemed inattentive
    pub attention_timeout: Duration,

    /// Number of story lines served per page
    pub lines_per_page: usize,

    /// Upper bound on a single emotion classification call; a classifier
    /// that exceeds it is treated as having failed for that frame
    pub classify_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            attention_timeout: Duration::from_secs(10),
            lines_per_page: 3,
            classify_timeout: Duration::from_secs(5),
        }
    }
}
