use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::attention::{AttentionStatus, AttentionTracker};
use crate::config::SessionConfig;
use crate::story::{
    split_sentences, story_prompt, PageFetch, ReaderProfile, SpeechSynthesizer, StoryGenerator,
    StoryState,
};
use crate::vision::{unwrap_transport_payload, EmotionClassifier, FaceLocator};
use crate::{log_info, log_warn};

use super::SessionError;

const ENABLE_LOGS: bool = true;

/// What a monitoring call reports back: the tracker's status plus the story
/// cursor and gate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonitorReport {
    pub attention_status: AttentionStatus,
    pub story_state: StoryCursor,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoryCursor {
    pub current_line: usize,
    pub paused: bool,
}

/// Summary returned by a successful generation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoryDigest {
    pub message: String,
    pub total_pages: usize,
    pub total_lines: usize,
    pub lines_per_page: usize,
}

/// Full story-state view for the boundary, lines included, so resume and
/// state queries can render without a second page fetch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StorySnapshot {
    pub story_lines: Vec<String>,
    pub current_line: usize,
    pub paused: bool,
    pub total_lines: usize,
    pub lines_per_page: usize,
}

/// Session-scoped owner of the attention tracker and the story state.
///
/// Injected into request handlers instead of living as ambient shared
/// state. Story and profile mutation each go through a single lock; the
/// tracker serializes frame processing behind its own.
#[derive(Clone)]
pub struct SessionController {
    id: String,
    created_at: DateTime<Utc>,
    tracker: Arc<AttentionTracker>,
    story: Arc<Mutex<StoryState>>,
    reader: Arc<Mutex<Option<ReaderProfile>>>,
    generator: Arc<dyn StoryGenerator>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl SessionController {
    pub fn new(
        config: &SessionConfig,
        locator: Arc<dyn FaceLocator>,
        classifier: Arc<dyn EmotionClassifier>,
        generator: Arc<dyn StoryGenerator>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            tracker: Arc::new(AttentionTracker::new(config, locator, classifier)),
            story: Arc::new(Mutex::new(StoryState::new(config.lines_per_page))),
            reader: Arc::new(Mutex::new(None)),
            generator,
            speech,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub async fn set_reader_profile(&self, profile: ReaderProfile) {
        *self.reader.lock().await = Some(profile);
    }

    pub async fn reader_profile(&self) -> Option<ReaderProfile> {
        self.reader.lock().await.clone()
    }

    /// Run one frame through the tracker and apply the resulting signal to
    /// the delivery gate. Pausing is one-directional here: an inattentive
    /// result pauses the story, an attentive one never unpauses it.
    pub async fn monitor_attention(&self, frame_bytes: &[u8]) -> MonitorReport {
        let attention_status = self.tracker.update(frame_bytes).await;

        let mut story = self.story.lock().await;
        if !attention_status.is_attentive {
            if !story.paused {
                log_info!("session {}: reader inattentive, pausing story", self.id);
            }
            story.pause();
        }

        MonitorReport {
            attention_status,
            story_state: StoryCursor {
                current_line: story.current_line,
                paused: story.paused,
            },
        }
    }

    /// Boundary variant of [`monitor_attention`] taking the base64 transport
    /// wrapper (with optional data-URI prefix).
    ///
    /// [`monitor_attention`]: SessionController::monitor_attention
    pub async fn monitor_attention_payload(
        &self,
        payload: &str,
    ) -> Result<MonitorReport, SessionError> {
        let frame_bytes = unwrap_transport_payload(payload)?;
        Ok(self.monitor_attention(&frame_bytes).await)
    }

    pub async fn reset_attention_status(&self) {
        self.tracker.reset().await;
    }

    pub async fn attention_status(&self) -> AttentionStatus {
        self.tracker.status().await
    }

    /// Generate a fresh story from the stored reader profile.
    ///
    /// State is replaced only after the generator returns usable text, so a
    /// failed generation leaves the previous story, cursor, gate, and
    /// attention state intact.
    pub async fn generate_story(&self) -> Result<StoryDigest, SessionError> {
        let profile = self
            .reader
            .lock()
            .await
            .clone()
            .ok_or(SessionError::NoReaderProfile)?;

        let prompt = story_prompt(&profile);
        log_info!("session {}: generating story in {}", self.id, profile.language);

        let text = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|err| {
                log_warn!("session {}: story generation failed: {err:#}", self.id);
                SessionError::StoryGeneration(err)
            })?;

        let lines = split_sentences(&text);
        if lines.is_empty() {
            return Err(SessionError::StoryGeneration(anyhow!(
                "generator returned no usable text"
            )));
        }

        let digest = {
            let mut story = self.story.lock().await;
            story.set_story(lines);
            StoryDigest {
                message: "Story generated successfully".to_string(),
                total_pages: story.total_pages(),
                total_lines: story.story_lines.len(),
                lines_per_page: story.lines_per_page,
            }
        };

        self.tracker.reset().await;

        log_info!(
            "session {}: story ready, {} lines over {} pages",
            self.id,
            digest.total_lines,
            digest.total_pages
        );
        Ok(digest)
    }

    pub async fn fetch_page(&self, page_number: usize) -> Result<PageFetch, SessionError> {
        self.story.lock().await.fetch_page(page_number)
    }

    /// Clear the delivery gate and the attention state, unconditionally.
    pub async fn resume_story(&self) -> StorySnapshot {
        let snapshot = {
            let mut story = self.story.lock().await;
            story.resume();
            snapshot_of(&story)
        };
        self.tracker.reset().await;
        snapshot
    }

    pub async fn story_snapshot(&self) -> StorySnapshot {
        snapshot_of(&*self.story.lock().await)
    }

    /// Voice a piece of story text through the speech backend.
    pub async fn narrate(&self, text: &str) -> Result<(), SessionError> {
        self.speech.speak(text).await.map_err(SessionError::Speech)
    }
}

fn snapshot_of(story: &StoryState) -> StorySnapshot {
    StorySnapshot {
        story_lines: story.story_lines.clone(),
        current_line: story.current_line,
        paused: story.paused,
        total_lines: story.story_lines.len(),
        lines_per_page: story.lines_per_page,
    }
}
