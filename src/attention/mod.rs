pub mod status;
pub mod tracker;

pub use status::AttentionStatus;
pub use tracker::AttentionTracker;
