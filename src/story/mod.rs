pub mod generator;
pub mod reader;
pub mod split;
pub mod state;

pub use generator::{SpeechSynthesizer, StoryGenerator};
pub use reader::{story_prompt, ReaderProfile};
pub use split::split_sentences;
pub use state::{PageFetch, StoryPage, StoryState};
