use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::chat::model::{ChatMessage, ROLE_ASSISTANT, ROLE_USER};
use crate::modules::listing::model::ListingInput;

/// One prior turn on the wire: role plus text, nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChatTurn {
    #[validate(length(min = 1, message = "Role cannot be empty"))]
    pub role: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

impl ChatTurn {
    pub fn has_known_role(&self) -> bool {
        self.role == ROLE_USER || self.role == ROLE_ASSISTANT
    }
}

impl From<&ChatMessage> for ChatTurn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.clone(),
            content: message.content.clone(),
        }
    }
}

/// Listing snapshot riding along as conversation context; every field is
/// optional and empty strings are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

impl ListingContext {
    /// Labeled context lines for the fields that are present and non-empty,
    /// or None when there is nothing to add.
    pub fn context_block(&self) -> Option<String> {
        let mut chunks = Vec::new();

        let fields = [
            ("Title", &self.title),
            ("Description", &self.description),
            ("Price", &self.price),
            ("Category", &self.category),
            ("Condition", &self.condition),
            ("Target Audience", &self.target_audience),
        ];

        for (label, value) in fields {
            if let Some(value) = value {
                if !value.is_empty() {
                    chunks.push(format!("{}: {}", label, value));
                }
            }
        }

        if chunks.is_empty() {
            None
        } else {
            Some(chunks.join("\n"))
        }
    }
}

impl From<&ListingInput> for ListingContext {
    fn from(listing: &ListingInput) -> Self {
        let field = |value: &str| {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        Self {
            title: field(&listing.title),
            description: field(&listing.description),
            price: field(&listing.price),
            category: field(&listing.category),
            condition: field(&listing.condition),
            target_audience: field(&listing.target_audience),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "At least one message is required"), nested)]
    pub messages: Vec<ChatTurn>,
    pub listing: Option<ListingContext>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ChatError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
            fallback: None,
        }
    }

    pub fn validation(errors: &validator::ValidationErrors) -> Self {
        Self {
            error: "Invalid chat payload.".to_string(),
            details: serde_json::to_value(errors).ok(),
            fallback: None,
        }
    }

    pub fn bad_role() -> Self {
        Self {
            error: "Invalid chat payload.".to_string(),
            details: Some(serde_json::json!({
                "messages": [{"message": "Role must be 'user' or 'assistant'"}]
            })),
            fallback: None,
        }
    }

    /// The model answered with nothing; hand the client something
    /// conversational to show instead of a bare error.
    pub fn empty_reply() -> Self {
        Self {
            error: "Empty response from model. Try again.".to_string(),
            details: None,
            fallback: Some(
                "I'm recalibrating and didn't catch that. Could you rephrase your question?"
                    .to_string(),
            ),
        }
    }
}
