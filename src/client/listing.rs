use crate::client::api::ApiClient;
use crate::modules::listing::model::{ListingInput, SuggestionResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Description,
    Price,
    Category,
    Condition,
    TargetAudience,
}

/// The fixed example record behind the "load sample" action.
pub fn sample_listing() -> ListingInput {
    ListingInput {
        title: "Refurbished MacBook Air M1 256GB".to_string(),
        description: "Lightly used 2021 MacBook Air (Space Gray) with 8GB RAM and 256GB SSD. \
                      Fresh battery cycle count under 90, includes original box, charger, and \
                      protective sleeve."
            .to_string(),
        price: "₹58,000".to_string(),
        category: "Electronics".to_string(),
        condition: "Excellent".to_string(),
        target_audience: "Remote workers and students needing fast delivery in Delhi NCR"
            .to_string(),
    }
}

/// In-memory state behind the listing form: one listing record, the last
/// fetched suggestions, and a single-flight submit latch. Submission is a
/// two-phase transition (`begin_submit` / `apply_result`) so the state
/// machine is testable without a rendering environment or a server.
#[derive(Debug, Default)]
pub struct ListingForm {
    listing: ListingInput,
    suggestions: Option<SuggestionResponse>,
    error: Option<String>,
    submitting: bool,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(&self) -> &ListingInput {
        &self.listing
    }

    pub fn suggestions(&self) -> Option<&SuggestionResponse> {
        self.suggestions.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: ListingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ListingField::Title => self.listing.title = value,
            ListingField::Description => self.listing.description = value,
            ListingField::Price => self.listing.price = value,
            ListingField::Category => self.listing.category = value,
            ListingField::Condition => self.listing.condition = value,
            ListingField::TargetAudience => self.listing.target_audience = value,
        }
    }

    /// Replaces the record with the fixed sample. Purely local.
    pub fn load_sample(&mut self) {
        self.listing = sample_listing();
    }

    /// Blanks every field and drops previously fetched suggestions.
    pub fn reset(&mut self) {
        self.listing = ListingInput::default();
        self.suggestions = None;
        self.error = None;
    }

    /// Starts a submission, returning the snapshot to post. None while a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ListingInput> {
        if self.submitting {
            return None;
        }

        self.submitting = true;
        self.error = None;
        Some(self.listing.clone())
    }

    /// Resolves the in-flight submission. Failures keep the form fields so
    /// the seller does not lose input.
    pub fn apply_result(&mut self, result: Result<SuggestionResponse, String>) {
        match result {
            Ok(suggestions) => self.suggestions = Some(suggestions),
            Err(message) => self.error = Some(message),
        }
        self.submitting = false;
    }

    /// Full submit round trip; a no-op while one is already outstanding.
    pub async fn submit(&mut self, api: &ApiClient) {
        let Some(listing) = self.begin_submit() else {
            return;
        };

        let result = api.suggest(&listing).await.map_err(|e| e.to_string());
        self.apply_result(result);
    }
}
