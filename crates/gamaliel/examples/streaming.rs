//! Streaming example: streaming chat completion with the Gamaliel API.

use futures_util::StreamExt;
use gamaliel::{GamalielClient, conversions};
use gamaliel_core::{Message, Passage, Role, StudyOptions, StudyRequest};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = GamalielClient::new(
        "sk-...".to_string(), // Your API key (required)
        "https://api.gamaliel.ai/v1".to_string(),
        "gpt-4o-mini".to_string(),
    );

    let request = StudyRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            "What does the Bible say about forgiveness?",
        )])
        .options(
            StudyOptions::builder()
                .theology_slug("default".to_string())
                .passage(Passage::new("MAT", 6))
                .build()?,
        )
        .build()?;

    let mut stream = client.generate_stream(&request).await?;
    let mut stdout = std::io::stdout();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if let Some(content) = conversions::delta_text(&chunk) {
            print!("{}", content);
            stdout.flush()?;
        }
    }

    println!(); // New line after stream completes

    Ok(())
}
