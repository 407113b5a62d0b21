//! Provider registry for managing LLM provider instances.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::anthropic::AnthropicProvider;
use super::openai::OpenAIProvider;
use super::provider::{LLMProvider, Provider};
use crate::config::LlmConfig;

/// Registry of LLM providers, keyed by provider name.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<Provider, Arc<dyn LLMProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize providers from configuration. A provider is only
    /// registered when its credential is present.
    pub fn from_config(config: &LlmConfig) -> Self {
        let mut registry = Self::new();

        if let Some(ref api_key) = config.openai.api_key {
            let provider =
                OpenAIProvider::new(api_key.clone(), config.openai.base_url.clone());
            registry.register(Provider::OpenAI, Arc::new(provider));
            info!("Registered OpenAI provider");
        }

        if let Some(ref api_key) = config.anthropic.api_key {
            let provider =
                AnthropicProvider::new(api_key.clone(), config.anthropic.base_url.clone());
            registry.register(Provider::Anthropic, Arc::new(provider));
            info!("Registered Anthropic provider");
        }

        if registry.providers.is_empty() {
            warn!(
                "No LLM providers configured. \
                Set OPENAI_API_KEY or ANTHROPIC_API_KEY."
            );
        }

        registry
    }

    /// Register a provider implementation.
    pub fn register(&mut self, provider: Provider, implementation: Arc<dyn LLMProvider>) {
        self.providers.insert(provider, implementation);
    }

    /// Get a provider by name.
    pub fn get(&self, provider: &Provider) -> Option<Arc<dyn LLMProvider>> {
        self.providers.get(provider).cloned()
    }
}
