//! Live tests against the hosted Gamaliel API.
//!
//! These make real API calls and consume tokens. Provide GAMALIEL_API_KEY
//! in the environment or a .env file, then run:
//! cargo test --package gamaliel --features api

use futures_util::StreamExt;
use gamaliel::{GamalielClient, GamalielConfig, conversions};
use gamaliel_core::{Message, Passage, Role, StudyOptions, StudyRequest};

fn client_from_env() -> GamalielClient {
    dotenvy::dotenv().ok();
    let config = GamalielConfig::from_env().expect("GAMALIEL_API_KEY must be set for API tests");
    GamalielClient::from_config(&config)
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_basic_generation() {
    let client = client_from_env();

    let request = StudyRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            "What does the Bible say about forgiveness?",
        )])
        .options(
            StudyOptions::builder()
                .theology_slug("reformed".to_string())
                .passage(Passage::new("MAT", 6).with_verses(vec![14, 15]))
                .max_words(100_u32)
                .build()
                .expect("Valid options"),
        )
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.text().is_empty());
    println!("Response: {}", response.text());
    if let Some(usage) = response.usage() {
        println!("Tokens used: {}", usage.total_tokens());
    }
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_streaming_generation() {
    let client = client_from_env();

    let request = StudyRequest::builder()
        .messages(vec![Message::new(
            Role::User,
            "What does the Bible say about forgiveness?",
        )])
        .options(
            StudyOptions::builder()
                .theology_slug("default".to_string())
                .passage(Passage::new("MAT", 6))
                .build()
                .expect("Valid options"),
        )
        .build()
        .expect("Valid request");

    let mut stream = client
        .generate_stream(&request)
        .await
        .expect("API call succeeded");

    let mut text = String::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.expect("Decoded chunk");
        if let Some(fragment) = conversions::delta_text(&chunk) {
            text.push_str(fragment);
        }
    }

    assert!(!text.is_empty());
    println!("Response: {}", text);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_ask_convenience() {
    let client = client_from_env();

    let answer = client
        .ask("Say 'test' and nothing else.")
        .await
        .expect("API call succeeded");

    assert!(!answer.is_empty());
    println!("Response: {}", answer);
}
