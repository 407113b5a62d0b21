//! Chat endpoint and the embedded page.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::llm::{ChatRequest, Message, Provider};
use crate::markdown;
use crate::prompt;
use crate::response;
use crate::server::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatApiRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatApiResponse {
    pub content: String,
    /// Server-rendered display form of `content`.
    pub html: String,
    pub provider: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}

/// POST /api/chat
///
/// Stateless per request: selects a provider, prepends the tutoring policy,
/// forwards the caller's turns verbatim, and returns one assistant turn.
/// Every failure is caught here and mapped to the uniform 500 body.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatApiRequest>,
) -> Response {
    let name = req
        .provider
        .as_deref()
        .unwrap_or(&state.config.llm.default_provider);

    let selected = match name.parse::<Provider>() {
        Ok(p) => p,
        Err(e) => return response::internal_error(e.to_string()).into_response(),
    };

    let Some(provider) = state.providers.get(&selected) else {
        return response::internal_error(format!(
            "Provider '{selected}' not configured. Check API key environment variable."
        ))
        .into_response();
    };

    let chat_request = ChatRequest {
        model: state.config.llm.model_for(selected).to_string(),
        messages: prompt::build_messages(&req.messages),
        temperature: Some(state.config.llm.temperature),
        max_tokens: Some(state.config.llm.max_output_tokens),
    };

    debug!(provider = %selected, turns = req.messages.len(), "forwarding chat request");

    let chat_response = match provider.chat(chat_request).await {
        Ok(resp) => resp,
        Err(e) => {
            error!(provider = %selected, "LLM request failed: {e}");
            return response::internal_error(format!("LLM request failed: {e}"))
                .into_response();
        }
    };

    let Some(content) = chat_response.first_content() else {
        return response::internal_error("LLM response contained no completion")
            .into_response();
    };

    let response = ChatApiResponse {
        content: content.to_string(),
        html: markdown::render(content),
        provider: selected.to_string(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
