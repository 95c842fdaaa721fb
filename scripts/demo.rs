use std::env;

use sellwise::client::api::ApiClient;
use sellwise::client::chat::ChatPanel;
use sellwise::client::listing::ListingForm;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let base_url =
        env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let api = ApiClient::new(&base_url);

    println!("\n🛒 Sellwise demo against {}\n", base_url);

    let mut form = ListingForm::new();
    form.load_sample();
    println!("📋 Listing: {}", form.listing().title);

    form.submit(&api).await;

    match form.suggestions() {
        Some(suggestions) => {
            println!("\n✨ Summary:\n{}\n", suggestions.summary);
            println!("✏️  Copy upgrades:");
            for item in &suggestions.copy_suggestions {
                println!("  - {}", item);
            }
            println!("🏷️  Keyword tags: {}", suggestions.keyword_tags.join(", "));
            println!("📈 Growth ideas:");
            for idea in &suggestions.growth_ideas {
                println!("  - {}", idea);
            }
        }
        None => {
            println!(
                "❌ No suggestions: {}. Is the server running?",
                form.error().unwrap_or("unknown error")
            );
        }
    }

    let mut panel = ChatPanel::new();
    panel.set_input("A buyer offered 20% below asking. How should I respond?");
    panel.send(&api, form.listing()).await;

    println!("\n💬 Transcript:");
    for message in panel.messages() {
        println!("  [{}] {}", message.role, message.content);
    }
    if let Some(error) = panel.error() {
        println!("❌ Chat failed: {}", error);
    }

    Ok(())
}
