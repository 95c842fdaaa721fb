use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, warn};
use validator::Validate;

use crate::config::prompts;
use crate::modules::chat::schema::{ChatError, ChatReply, ChatRequest};
use crate::services::llm::{LlmClient, PromptMessage};
use crate::AppState;

const TEMPERATURE: f32 = 0.4;

/// Replays the turn history to the provider behind a system prompt carrying
/// any listing context, and returns the trimmed reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ChatError>)> {
    if let Err(e) = payload.validate() {
        warn!("rejected chat request: {}", e);
        return Err((StatusCode::BAD_REQUEST, Json(ChatError::validation(&e))));
    }

    if payload.messages.iter().any(|turn| !turn.has_known_role()) {
        warn!("rejected chat request: unknown role in history");
        return Err((StatusCode::BAD_REQUEST, Json(ChatError::bad_role())));
    }

    let llm = LlmClient::new(state.http.clone()).map_err(|e| {
        error!("chat request failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatError::new(e.to_string())),
        )
    })?;

    let context_block = payload.listing.as_ref().and_then(|l| l.context_block());

    let mut messages = Vec::with_capacity(payload.messages.len() + 1);
    messages.push(PromptMessage::system(prompts::chat_system_prompt(
        context_block,
    )));
    messages.extend(
        payload
            .messages
            .iter()
            .map(|turn| PromptMessage::new(turn.role.clone(), turn.content.clone())),
    );

    let content = llm
        .chat_completion(llm.default_model(), TEMPERATURE, &messages, false)
        .await
        .map_err(|e| {
            error!("chat request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatError::new("Unable to generate a response.")),
            )
        })?;

    let reply = content.trim();

    if reply.is_empty() {
        error!("model returned empty chat content");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatError::empty_reply()),
        ));
    }

    Ok(Json(ChatReply {
        reply: reply.to_string(),
    }))
}
