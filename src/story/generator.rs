use anyhow::Result;
use async_trait::async_trait;

/// Generative text backend producing the raw narrative for a prompt.
/// Failures surface to the caller as an explicit generation error; the
/// session never falls back to a default story.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Speech backend that voices a piece of story text.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str) -> Result<()>;
}
