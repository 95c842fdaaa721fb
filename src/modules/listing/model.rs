use serde::{Deserialize, Serialize};
use validator::Validate;

/// The seller's product record. Doubles as the suggestion request payload;
/// all fields are free text, no currency or numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingInput {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 1, message = "Price cannot be empty"))]
    pub price: String,
    #[validate(length(min = 2, message = "Category must be at least 2 characters"))]
    pub category: String,
    #[validate(length(min = 2, message = "Condition must be at least 2 characters"))]
    pub condition: String,
    #[validate(length(min = 2, message = "Target audience must be at least 2 characters"))]
    pub target_audience: String,
}

impl ListingInput {
    /// User-facing prompt block embedding all six fields.
    pub fn prompt_block(&self) -> String {
        format!(
            "Listing Information:\nTitle: {}\nDescription: {}\nPrice: {}\nCategory: {}\nCondition: {}\nTarget Audience: {}\n\nReturn optimized guidance.",
            self.title, self.description, self.price, self.category, self.condition, self.target_audience
        )
    }
}

/// Structured guidance as produced by the model. The server returns the
/// model's JSON untouched; this typed view is what the client deserializes
/// into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub summary: String,
    pub copy_suggestions: Vec<String>,
    pub keyword_tags: Vec<String>,
    pub growth_ideas: Vec<String>,
}
