use crate::client::api::ApiClient;
use crate::modules::chat::model::ChatMessage;
use crate::modules::chat::schema::ChatTurn;
use crate::modules::listing::model::ListingInput;

/// Fixed greeting seeding every new transcript.
pub const ASSISTANT_GREETING: &str = "Hi! I'm your marketplace sales agent. Share your \
listing details and I'll help you make it sell faster.";

/// In-memory chat state: an append-only transcript, the draft input, and a
/// single-flight send latch. Sending is optimistic: the user turn is
/// committed before the request goes out and is never rolled back; a failed
/// request only surfaces an error string.
#[derive(Debug)]
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    input: String,
    sending: bool,
    error: Option<String>,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(ASSISTANT_GREETING.to_string())],
            input: String::new(),
            sending: false,
            error: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Starts a send: appends the trimmed draft as a user turn, clears the
    /// draft, and returns the full history as wire turns. None (and no
    /// transcript change) when the draft is blank or a send is in flight.
    pub fn begin_send(&mut self) -> Option<Vec<ChatTurn>> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.sending {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        self.input.clear();
        self.sending = true;
        self.error = None;

        Some(self.messages.iter().map(ChatTurn::from).collect())
    }

    /// Resolves the in-flight send: commits the assistant turn, or records
    /// the error leaving the transcript as-is.
    pub fn apply_reply(&mut self, result: Result<String, String>) {
        match result {
            Ok(reply) => self.messages.push(ChatMessage::assistant(reply)),
            Err(message) => self.error = Some(message),
        }
        self.sending = false;
    }

    /// Full send round trip with the listing snapshot as context; a no-op
    /// while a send is already outstanding or the draft is blank.
    pub async fn send(&mut self, api: &ApiClient, listing: &ListingInput) {
        let Some(turns) = self.begin_send() else {
            return;
        };

        let result = api.chat(turns, listing).await.map_err(|e| e.to_string());
        self.apply_reply(result);
    }
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}
