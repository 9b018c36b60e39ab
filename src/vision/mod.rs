pub mod capabilities;
pub mod decoder;

pub use capabilities::{BoundingBox, EmotionClassifier, FaceLocator};
pub use decoder::{decode_frame, probe_frame, unwrap_transport_payload, FrameInfo};
