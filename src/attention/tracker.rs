use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use image::DynamicImage;
use tokio::sync::Mutex;
use tokio::time::{timeout, Instant};

use crate::config::SessionConfig;
use crate::vision::{decode_frame, BoundingBox, EmotionClassifier, FaceLocator};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

use super::AttentionStatus;

struct TrackerInner {
    status: AttentionStatus,
    last_face_time: Instant,
}

/// Attention state machine. Consumes encoded frames and maintains the
/// attentive/inattentive signal plus elapsed face-absence time.
///
/// Frame processing is serialized behind a single lock: at most one frame is
/// in flight per tracker, and concurrent callers queue. All sub-failures
/// (decode, locate, classify) degrade to "keep prior status"; `update` never
/// returns an error.
pub struct AttentionTracker {
    inner: Mutex<TrackerInner>,
    locator: Arc<dyn FaceLocator>,
    classifier: Arc<dyn EmotionClassifier>,
    attention_timeout: Duration,
    classify_timeout: Duration,
}

impl AttentionTracker {
    pub fn new(
        config: &SessionConfig,
        locator: Arc<dyn FaceLocator>,
        classifier: Arc<dyn EmotionClassifier>,
    ) -> Self {
        Self {
            inner: Mutex::new(TrackerInner {
                status: AttentionStatus::default(),
                last_face_time: Instant::now(),
            }),
            locator,
            classifier,
            attention_timeout: config.attention_timeout,
            classify_timeout: config.classify_timeout,
        }
    }

    /// Process one frame and return the resulting status.
    ///
    /// No face: absence time accumulates, and once it reaches the
    /// attentiveness timeout the reader is marked inattentive. Below the
    /// timeout the attentive flag is left exactly as it was; absence alone
    /// never restores it. Only a located face flips it back to true.
    ///
    /// Face located: the attentive transition happens unconditionally, then
    /// the first box is cropped and classified best-effort with a bounded
    /// timeout.
    pub async fn update(&self, frame_bytes: &[u8]) -> AttentionStatus {
        let mut inner = self.inner.lock().await;

        let frame = match decode_frame(frame_bytes) {
            Ok(frame) => frame,
            Err(err) => {
                log_warn!("frame decode failed, keeping previous status: {err:#}");
                return inner.status.clone();
            }
        };

        let faces = match self.locate(frame.clone()).await {
            Ok(faces) => faces,
            Err(err) => {
                log_warn!("face location failed, keeping previous status: {err:#}");
                return inner.status.clone();
            }
        };

        let now = Instant::now();
        match faces.first() {
            None => {
                let elapsed = now.duration_since(inner.last_face_time);
                inner.status.time_without_face = elapsed.as_secs_f64();
                if elapsed >= self.attention_timeout {
                    inner.status.is_attentive = false;
                }
            }
            Some(&face_box) => {
                inner.last_face_time = now;
                inner.status.time_without_face = 0.0;
                inner.status.is_attentive = true;

                match self.classify(face_box.crop(&frame)).await {
                    Ok(emotion) => {
                        log_info!("dominant emotion: {emotion}");
                        inner.status.last_emotion = Some(emotion);
                    }
                    Err(err) => {
                        log_warn!("emotion classification failed: {err:#}");
                    }
                }
            }
        }

        inner.status.clone()
    }

    /// Restore the default status (attentive, no emotion, zero absence) and
    /// re-anchor the last-face timestamp. The only way to clear an
    /// inattentive state without a face appearing.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.status = AttentionStatus::default();
        inner.last_face_time = Instant::now();
    }

    pub async fn status(&self) -> AttentionStatus {
        self.inner.lock().await.status.clone()
    }

    async fn locate(&self, frame: DynamicImage) -> Result<Vec<BoundingBox>> {
        let locator = Arc::clone(&self.locator);
        tokio::task::spawn_blocking(move || locator.locate(&frame))
            .await
            .context("face locator worker join failed")?
    }

    async fn classify(&self, face: DynamicImage) -> Result<String> {
        let classifier = Arc::clone(&self.classifier);
        let worker = tokio::task::spawn_blocking(move || classifier.classify(&face));

        match timeout(self.classify_timeout, worker).await {
            Ok(joined) => joined.context("emotion classifier worker join failed")?,
            Err(_) => Err(anyhow!(
                "emotion classification timed out after {:?}",
                self.classify_timeout
            )),
        }
    }
}
