pub mod openai_compatible;
pub mod traits;

pub use openai_compatible::OpenAiCompatibleProvider;
pub use traits::{ChatMessage, ChatProvider, ProviderError};
