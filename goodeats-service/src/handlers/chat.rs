use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::{compose_prompt, GenerationParams};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Relay one user message to the text provider, prefixed with the system
/// context. Nothing is remembered between calls.
#[tracing::instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    request
        .validate()
        .map_err(|_| AppError::ValidationError("Message is required".to_string()))?;
    let message = request.message.unwrap_or_default();

    let prompt = compose_prompt(&state.chat.system_prompt, &message);
    let params = GenerationParams::with_max_tokens(state.chat.max_output_tokens);

    tracing::info!(
        message_len = message.len(),
        max_tokens = state.chat.max_output_tokens,
        "Forwarding chat message to text provider"
    );

    let response = state
        .text_provider
        .generate(&prompt, &params)
        .await
        .map_err(|e| AppError::UpstreamError(e.to_string()))?;

    let reply = response.text.ok_or_else(|| {
        AppError::UpstreamError("Text provider returned an empty response".to_string())
    })?;

    tracing::info!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "Chat reply generated"
    );

    Ok(Json(ChatResponse { reply }))
}
