//! Anthropic provider with native API format.

use async_trait::async_trait;
use reqwest::Client;

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{ChatRequest, ChatResponse, Choice, Message, Role, Usage};

/// Anthropic provider. Requests are translated into the native messages
/// API format and responses mapped back into the common types.
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    api_key: String,
    api_version: String,
}

impl AnthropicProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";
    pub const DEFAULT_API_VERSION: &'static str = "2023-06-01";

    /// Upstream requires max_tokens; used when the caller left it unset.
    const FALLBACK_MAX_TOKENS: u32 = 4096;

    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            api_version: Self::DEFAULT_API_VERSION.to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        let url = format!("{}/v1/messages", self.base_url);
        let anthropic_request = to_request(&request);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&anthropic_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LLMError::Api { status, message });
        }

        let anthropic_response: Response = response.json().await?;
        Ok(from_response(anthropic_response))
    }
}

// --- Request/Response types ---

#[derive(serde::Serialize)]
struct Request {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<RequestMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(serde::Serialize)]
struct RequestMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct Response {
    id: String,
    content: Vec<Content>,
    stop_reason: Option<String>,
    usage: Option<ResponseUsage>,
}

#[derive(serde::Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    text: String,
}

#[derive(serde::Deserialize)]
struct ResponseUsage {
    input_tokens: u32,
    output_tokens: u32,
}

// --- Conversions ---

fn to_request(request: &ChatRequest) -> Request {
    let mut system_parts: Vec<&str> = Vec::new();
    let mut messages = Vec::new();

    for msg in &request.messages {
        match msg.role {
            // Anthropic wants system content as a separate field
            Role::System => system_parts.push(&msg.content),
            Role::User => messages.push(RequestMessage {
                role: "user".to_string(),
                content: msg.content.clone(),
            }),
            Role::Assistant => messages.push(RequestMessage {
                role: "assistant".to_string(),
                content: msg.content.clone(),
            }),
        }
    }

    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };

    Request {
        model: request.model.clone(),
        max_tokens: request
            .max_tokens
            .unwrap_or(AnthropicProvider::FALLBACK_MAX_TOKENS),
        system,
        messages,
        temperature: request.temperature,
    }
}

fn from_response(response: Response) -> ChatResponse {
    let content = response
        .content
        .into_iter()
        .filter(|c| c.content_type == "text")
        .map(|c| c.text)
        .collect::<Vec<_>>()
        .join("");

    ChatResponse {
        id: response.id,
        choices: vec![Choice {
            index: 0,
            message: Message {
                role: Role::Assistant,
                content,
            },
            finish_reason: response.stop_reason,
        }],
        usage: response.usage.map(|u| Usage {
            prompt_tokens: u.input_tokens,
            completion_tokens: u.output_tokens,
            total_tokens: u.input_tokens + u.output_tokens,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_messages_lifted_into_system_field() {
        let request = ChatRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            messages: vec![
                Message::system("Be a tutor."),
                Message::user("Reverse a string"),
                Message::assistant("What have you tried?"),
            ],
            temperature: Some(0.7),
            max_tokens: Some(1000),
        };

        let native = to_request(&request);
        assert_eq!(native.system.as_deref(), Some("Be a tutor."));
        assert_eq!(native.messages.len(), 2);
        assert_eq!(native.messages[0].role, "user");
        assert_eq!(native.messages[1].role, "assistant");
        assert_eq!(native.max_tokens, 1000);
    }

    #[test]
    fn test_max_tokens_fallback() {
        let request = ChatRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            messages: vec![Message::user("Hi")],
            temperature: None,
            max_tokens: None,
        };

        let native = to_request(&request);
        assert_eq!(native.max_tokens, AnthropicProvider::FALLBACK_MAX_TOKENS);
        assert!(native.system.is_none());
    }

    #[test]
    fn test_response_text_blocks_joined() {
        let json = r#"{
            "id": "msg_01",
            "content": [
                {"type": "text", "text": "Hello "},
                {"type": "tool_use", "text": ""},
                {"type": "text", "text": "world"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }"#;

        let native: Response = serde_json::from_str(json).unwrap();
        let response = from_response(native);
        assert_eq!(response.first_content(), Some("Hello world"));
        assert_eq!(
            response.choices[0].finish_reason,
            Some("end_turn".to_string())
        );
        assert_eq!(response.usage.unwrap().total_tokens, 16);
    }
}
