use serde::{Deserialize, Serialize};

/// Reader preferences and background, submitted before story generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReaderProfile {
    /// e.g. "Mexican", "Chinese", "Indian"
    pub cultural_background: String,
    /// Target language for the story, e.g. "Spanish", "Mandarin"
    pub language: String,
    /// e.g. "5-7", "8-10", "11-13"
    pub age_range: String,
    /// e.g. "short", "medium", "long"
    pub story_length: String,
    /// e.g. "adventure", "fantasy", "folklore"
    pub story_type: String,
    /// Whether to frame the story around language acquisition.
    #[serde(default)]
    pub language_help: bool,
}

/// Build the generation prompt from the stored reader profile.
pub fn story_prompt(profile: &ReaderProfile) -> String {
    let mut prompt = format!(
        "The reader is from {}, is {}, and desires a story of {} of length {}. \
         Generate an engaging folklore story in {}.",
        profile.cultural_background,
        profile.age_range,
        profile.story_type,
        profile.story_length,
        profile.language,
    );

    if profile.language_help {
        prompt.push_str(
            " The goal is to help with language acquisition using the reader's \
             background and this story.",
        );
    }

    prompt.push_str(" Split it into clear sentences. Do not include \n tags.");
    prompt
}
