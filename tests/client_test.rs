use std::net::SocketAddr;
use std::sync::OnceLock;

use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

use sellwise::client::api::ApiClient;
use sellwise::client::chat::{ChatPanel, ASSISTANT_GREETING};
use sellwise::client::listing::{sample_listing, ListingField, ListingForm};
use sellwise::modules::listing::model::SuggestionResponse;
use sellwise::{modules, AppState};

fn canned_suggestions() -> SuggestionResponse {
    SuggestionResponse {
        summary: "Solid listing.".to_string(),
        copy_suggestions: vec!["Mention the warranty".to_string()],
        keyword_tags: vec!["desk".to_string()],
        growth_ideas: vec!["Bundle with a chair".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Listing form state
// ---------------------------------------------------------------------------

#[test]
fn test_load_sample_populates_every_field_without_network() {
    let mut form = ListingForm::new();
    form.load_sample();

    let listing = form.listing();
    let sample = sample_listing();
    assert_eq!(listing, &sample);
    assert!(!listing.title.is_empty());
    assert!(!listing.description.is_empty());
    assert!(!listing.price.is_empty());
    assert!(!listing.category.is_empty());
    assert!(!listing.condition.is_empty());
    assert!(!listing.target_audience.is_empty());

    // purely local: nothing fetched, nothing in flight
    assert!(form.suggestions().is_none());
    assert!(!form.is_submitting());
}

#[test]
fn test_reset_clears_fields_and_fetched_suggestions() {
    let mut form = ListingForm::new();
    form.load_sample();

    let snapshot = form.begin_submit().unwrap();
    assert_eq!(snapshot, sample_listing());
    form.apply_result(Ok(canned_suggestions()));
    assert!(form.suggestions().is_some());

    form.reset();

    assert_eq!(form.listing().title, "");
    assert_eq!(form.listing().description, "");
    assert_eq!(form.listing().price, "");
    assert_eq!(form.listing().category, "");
    assert_eq!(form.listing().condition, "");
    assert_eq!(form.listing().target_audience, "");
    assert!(form.suggestions().is_none());
    assert!(form.error().is_none());
}

#[test]
fn test_field_edits_touch_only_the_named_field() {
    let mut form = ListingForm::new();
    form.set_field(ListingField::Title, "Desk");
    form.set_field(ListingField::Price, "$50");

    assert_eq!(form.listing().title, "Desk");
    assert_eq!(form.listing().price, "$50");
    assert_eq!(form.listing().description, "");
}

#[test]
fn test_submit_latch_blocks_second_submission() {
    let mut form = ListingForm::new();
    form.load_sample();

    assert!(form.begin_submit().is_some());
    assert!(form.is_submitting());
    assert!(form.begin_submit().is_none());

    form.apply_result(Err("boom".to_string()));
    assert!(!form.is_submitting());
    assert_eq!(form.error(), Some("boom"));

    // latch released, next submission may start
    assert!(form.begin_submit().is_some());
}

#[test]
fn test_failed_submission_preserves_typed_fields() {
    let mut form = ListingForm::new();
    form.set_field(ListingField::Title, "Desk");

    form.begin_submit();
    form.apply_result(Err("Suggestion request failed.".to_string()));

    assert_eq!(form.listing().title, "Desk");
    assert!(form.suggestions().is_none());
    assert_eq!(form.error(), Some("Suggestion request failed."));
}

// ---------------------------------------------------------------------------
// Chat transcript state
// ---------------------------------------------------------------------------

#[test]
fn test_new_transcript_is_seeded_with_greeting() {
    let panel = ChatPanel::new();

    assert_eq!(panel.messages().len(), 1);
    assert_eq!(panel.messages()[0].role, "assistant");
    assert_eq!(panel.messages()[0].content, ASSISTANT_GREETING);
}

#[test]
fn test_transcript_is_append_only_and_order_preserving() {
    let mut panel = ChatPanel::new();

    for (question, answer) in [("A", "ra"), ("B", "rb"), ("C", "rc")] {
        panel.set_input(question);
        let turns = panel.begin_send().unwrap();
        // the optimistic user turn is already part of the outgoing history
        assert_eq!(turns.last().unwrap().content, question);
        panel.apply_reply(Ok(answer.to_string()));
    }

    let roles: Vec<&str> = panel.messages().iter().map(|m| m.role.as_str()).collect();
    assert_eq!(
        roles,
        ["assistant", "user", "assistant", "user", "assistant", "user", "assistant"]
    );

    let user_turns: Vec<&str> = panel
        .messages()
        .iter()
        .filter(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(user_turns, ["A", "B", "C"]);

    let mut ids: Vec<_> = panel.messages().iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), panel.messages().len());
}

#[test]
fn test_begin_send_trims_and_ignores_blank_input() {
    let mut panel = ChatPanel::new();

    panel.set_input("   ");
    assert!(panel.begin_send().is_none());
    assert_eq!(panel.messages().len(), 1);

    panel.set_input("  hello  ");
    let turns = panel.begin_send().unwrap();
    assert_eq!(turns.last().unwrap().content, "hello");
    assert_eq!(panel.input(), "");
}

#[test]
fn test_send_latch_blocks_overlapping_sends() {
    let mut panel = ChatPanel::new();

    panel.set_input("first");
    assert!(panel.begin_send().is_some());
    assert!(panel.is_sending());

    panel.set_input("second");
    assert!(panel.begin_send().is_none());
    assert_eq!(panel.messages().len(), 2);
    assert_eq!(panel.input(), "second");

    panel.apply_reply(Ok("reply".to_string()));
    assert!(!panel.is_sending());
    assert!(panel.begin_send().is_some());
}

#[test]
fn test_failed_send_keeps_user_turn_and_surfaces_error() {
    let mut panel = ChatPanel::new();

    panel.set_input("does anyone want this?");
    panel.begin_send().unwrap();
    panel.apply_reply(Err("Chat request failed.".to_string()));

    // no rollback of the optimistic user turn
    assert_eq!(panel.messages().len(), 2);
    assert_eq!(panel.messages()[1].role, "user");
    assert_eq!(panel.error(), Some("Chat request failed."));
    assert!(!panel.is_sending());
}

// ---------------------------------------------------------------------------
// End-to-end through ApiClient against the real router + stub provider
// ---------------------------------------------------------------------------

async fn completions(Json(body): Json<Value>) -> Json<Value> {
    let content = if body["response_format"]["type"] == "json_object" {
        json!({
            "summary": "Solid listing.",
            "copySuggestions": ["Mention the warranty"],
            "keywordTags": ["desk"],
            "growthIdeas": ["Bundle with a chair"]
        })
        .to_string()
    } else {
        "Price it at $45 for a quick sale.".to_string()
    };

    Json(json!({
        "id": "cmpl-stub",
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

fn serve_in_background(app: Router) -> SocketAddr {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().unwrap()
}

fn app_url() -> &'static str {
    static URL: OnceLock<String> = OnceLock::new();
    URL.get_or_init(|| {
        let provider = Router::new().route("/chat/completions", post(completions));
        let provider_addr = serve_in_background(provider);
        std::env::set_var("OPENAI_BASE_URL", format!("http://{}", provider_addr));
        std::env::set_var("OPENAI_API_KEY", "test-key");

        let app = Router::new()
            .merge(modules::listing::routes::routes())
            .merge(modules::chat::routes::routes())
            .with_state(AppState::new());

        format!("http://{}", serve_in_background(app))
    })
}

#[tokio::test]
async fn test_form_submit_end_to_end() {
    let api = ApiClient::new(app_url());

    let mut form = ListingForm::new();
    form.load_sample();
    form.submit(&api).await;

    assert!(!form.is_submitting());
    assert!(form.error().is_none());

    let suggestions = form.suggestions().unwrap();
    assert!(!suggestions.summary.is_empty());
    assert!(!suggestions.keyword_tags.is_empty());
}

#[tokio::test]
async fn test_form_submit_surfaces_server_validation_error() {
    let api = ApiClient::new(app_url());

    // blank form fails the endpoint's validation; fields are preserved
    let mut form = ListingForm::new();
    form.submit(&api).await;

    assert!(form.suggestions().is_none());
    assert_eq!(form.error(), Some("Invalid listing payload."));
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_chat_send_end_to_end() {
    let api = ApiClient::new(app_url());

    let mut form = ListingForm::new();
    form.load_sample();

    let mut panel = ChatPanel::new();
    panel.set_input("How should I price this?");
    panel.send(&api, form.listing()).await;

    assert!(panel.error().is_none());
    assert_eq!(panel.messages().len(), 3);
    assert_eq!(panel.messages()[1].role, "user");
    assert_eq!(panel.messages()[2].role, "assistant");
    assert!(!panel.messages()[2].content.is_empty());
}
