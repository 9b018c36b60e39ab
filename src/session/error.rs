use thiserror::Error;

/// Structured errors a session operation can return to the boundary.
///
/// Transient frame-processing failures (decode, locate, classify) never
/// appear here; those degrade to keep-prior-status inside the tracker.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No reader data available. Please submit data first.")]
    NoReaderProfile,

    #[error("No story has been generated yet")]
    NoStoryGenerated,

    #[error("Page number out of range")]
    PageOutOfRange,

    #[error("No image data provided")]
    EmptyFramePayload,

    #[error("Invalid base64 encoding")]
    InvalidFramePayload,

    #[error("Failed to generate story")]
    StoryGeneration(#[source] anyhow::Error),

    #[error("Speech synthesis failed")]
    Speech(#[source] anyhow::Error),
}

impl SessionError {
    /// The `{ "error": ... }` shape the transport boundary serializes.
    pub fn to_wire(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}
