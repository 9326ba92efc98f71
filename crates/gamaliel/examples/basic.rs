//! Basic example: non-streaming chat completion with the Gamaliel API.

use gamaliel::GamalielClient;
use gamaliel_core::{Message, Passage, Role, StudyOptions, StudyRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Client bound to the Gamaliel endpoint
    let client = GamalielClient::new(
        "sk-...".to_string(), // Your API key (required)
        "https://api.gamaliel.ai/v1".to_string(),
        "gpt-4o-mini".to_string(),
    );

    // Standard chat call with Gamaliel-specific parameters, passed
    // through to the server unmodified
    let request = StudyRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            "What does the Bible say about forgiveness?",
        )])
        .options(
            StudyOptions::builder()
                .theology_slug("reformed".to_string())
                .profile_slug("universal_explorer".to_string())
                .passage(Passage::new("MAT", 6).with_verses(vec![14, 15]))
                .max_words(300_u32)
                .build()?,
        )
        .build()?;

    let response = client.generate(&request).await?;

    println!("{}", response.text());
    if let Some(usage) = response.usage() {
        println!("\nTokens used: {}", usage.total_tokens());
    }

    Ok(())
}
