pub mod attention;
pub mod config;
pub mod session;
pub mod story;
pub mod utils;
pub mod vision;

pub use attention::{AttentionStatus, AttentionTracker};
pub use config::SessionConfig;
pub use session::{
    MonitorReport, SessionController, SessionError, StoryCursor, StoryDigest, StorySnapshot,
};
pub use story::{
    split_sentences, story_prompt, PageFetch, ReaderProfile, SpeechSynthesizer, StoryGenerator,
    StoryPage, StoryState,
};
pub use vision::{
    decode_frame, probe_frame, unwrap_transport_payload, BoundingBox, EmotionClassifier,
    FaceLocator, FrameInfo,
};

/// Initialize logging for an embedding process (reads RUST_LOG env var).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
