//! LLM provider client for chat completions.

mod anthropic;
mod error;
mod openai;
mod provider;
mod registry;
mod types;

pub use anthropic::AnthropicProvider;
pub use error::LLMError;
pub use openai::OpenAIProvider;
pub use provider::{LLMProvider, Provider, UnsupportedProvider};
pub use registry::ProviderRegistry;
pub use types::{ChatRequest, ChatResponse, Choice, Message, Role, Usage};
