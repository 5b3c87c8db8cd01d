pub mod moderation;
pub mod prompt;
pub mod providers;

pub use moderation::ModerationStore;
pub use prompt::compose_prompt;
pub use providers::{GenerationParams, ProviderError, TextProvider};
