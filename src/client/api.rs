use reqwest::Client;
use thiserror::Error;

use crate::modules::chat::schema::{ChatReply, ChatRequest, ChatTurn, ListingContext};
use crate::modules::listing::model::{ListingInput, SuggestionResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

/// HTTP client mirroring the browser's fetch calls against the two
/// endpoints. Non-success responses become errors carrying the body's
/// `error` string when one is present.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn suggest(&self, listing: &ListingInput) -> Result<SuggestionResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/suggest", self.base_url))
            .json(listing)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, "Suggestion request failed.").await);
        }

        Ok(response.json().await?)
    }

    pub async fn chat(
        &self,
        turns: Vec<ChatTurn>,
        listing: &ListingInput,
    ) -> Result<String, ClientError> {
        let request = ChatRequest {
            messages: turns,
            listing: Some(ListingContext::from(listing)),
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, "Chat request failed.").await);
        }

        let reply: ChatReply = response.json().await?;
        Ok(reply.reply)
    }

    async fn api_error(response: reqwest::Response, fallback: &str) -> ClientError {
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or(fallback)
                .to_string(),
            Err(_) => fallback.to_string(),
        };

        ClientError::Api(message)
    }
}
