use anyhow::Result;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Axis-aligned, zero-based face bounding box within a frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Crop this region out of the frame, clamped to the frame bounds.
    pub fn crop(&self, frame: &DynamicImage) -> DynamicImage {
        let x = self.x.min(frame.width());
        let y = self.y.min(frame.height());
        let width = self.width.min(frame.width() - x);
        let height = self.height.min(frame.height() - y);
        frame.crop_imm(x, y, width, height)
    }
}

/// Face detection backend. Returns zero or more boxes in an order the
/// contract leaves unspecified; the tracker operates on the first box only.
///
/// Implementations are CPU-bound model invocations and run on blocking
/// threads, so the trait is synchronous.
pub trait FaceLocator: Send + Sync {
    fn locate(&self, frame: &DynamicImage) -> Result<Vec<BoundingBox>>;
}

/// Emotion classification backend. Returns the dominant emotion label for a
/// cropped face region, drawn from a model-defined closed set (commonly
/// angry, disgust, fear, happy, sad, surprise, neutral). Best-effort: it may
/// fail independently of face location.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, face: &DynamicImage) -> Result<String>;
}
