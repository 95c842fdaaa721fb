use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, warn};
use validator::Validate;

use crate::config::prompts;
use crate::modules::listing::{model::ListingInput, schema::SuggestError};
use crate::services::llm::{LlmClient, PromptMessage};
use crate::AppState;

const TEMPERATURE: f32 = 0.2;

/// Forwards a validated listing to the provider and returns the model's
/// JSON untouched.
pub async fn suggest(
    State(state): State<AppState>,
    Json(payload): Json<ListingInput>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<SuggestError>)> {
    if let Err(e) = payload.validate() {
        warn!("rejected suggestion request: {}", e);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(SuggestError::validation(&e)),
        ));
    }

    let llm = LlmClient::new(state.http.clone()).map_err(|e| {
        error!("suggestion request failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SuggestError::new(e.to_string())),
        )
    })?;

    let messages = [
        PromptMessage::system(prompts::SUGGESTION_SYSTEM_PROMPT),
        PromptMessage::user(payload.prompt_block()),
    ];

    let content = llm
        .chat_completion(llm.default_model(), TEMPERATURE, &messages, true)
        .await
        .map_err(|e| {
            error!("suggestion request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SuggestError::new("Unable to generate suggestions.")),
            )
        })?;

    let parsed: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        error!("model returned non-JSON suggestion content: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SuggestError::new("Unable to generate suggestions.")),
        )
    })?;

    Ok(Json(parsed))
}
