use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuggestError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SuggestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
        }
    }

    pub fn validation(errors: &validator::ValidationErrors) -> Self {
        Self {
            error: "Invalid listing payload.".to_string(),
            details: serde_json::to_value(errors).ok(),
        }
    }
}
