pub mod controller;
pub mod error;

pub use controller::{
    MonitorReport, SessionController, StoryCursor, StoryDigest, StorySnapshot,
};
pub use error::SessionError;
