//! Tests for wire request construction.
//!
//! The serialized body must contain exactly the standard fields plus the
//! provided extension fields, values unmodified, with absent options
//! omitted from the body entirely.

use gamaliel::{GamalielApiError, conversions};
use gamaliel_core::{Message, Passage, Role, StudyOptions, StudyRequest};
use serde_json::{Value, json};

fn body_for(request: &StudyRequest, stream: bool) -> Value {
    let chat_request =
        conversions::to_chat_request(request, "gpt-4o-mini", stream).expect("Valid request");
    serde_json::to_value(&chat_request).expect("Serializable request")
}

fn sorted_keys(body: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = body
        .as_object()
        .expect("JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_full_request_carries_every_extension_field() {
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
                .build()
                .expect("Valid options"),
        )
        .build()
        .expect("Valid request");

    let body = body_for(&request, false);

    assert_eq!(
        sorted_keys(&body),
        vec![
            "book_id",
            "chapter",
            "max_words",
            "messages",
            "model",
            "profile_slug",
            "theology_slug",
            "verses",
        ]
    );

    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["theology_slug"], "reformed");
    assert_eq!(body["profile_slug"], "universal_explorer");
    assert_eq!(body["book_id"], "MAT");
    assert_eq!(body["chapter"], 6);
    assert_eq!(body["verses"], json!([14, 15]));
    assert_eq!(body["max_words"], 300);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(
        body["messages"][0]["content"],
        "What does the Bible say about forgiveness?"
    );
}

#[test]
fn test_minimal_request_omits_absent_options() {
    let request = StudyRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .build()
        .expect("Valid request");

    let body = body_for(&request, false);

    // No nulls for omitted options, and no stream flag on non-streaming calls
    assert_eq!(sorted_keys(&body), vec!["messages", "model"]);
}

#[test]
fn test_extension_fields_pass_through_unchanged() {
    // Fixed scenario: one user message plus three extension fields
    let request = StudyRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .options(
            StudyOptions::builder()
                .theology_slug("reformed".to_string())
                .passage(Passage::new("MAT", 6))
                .build()
                .expect("Valid options"),
        )
        .build()
        .expect("Valid request");

    let body = body_for(&request, false);

    assert_eq!(body["messages"], json!([{"role": "user", "content": "Hello"}]));
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["theology_slug"], "reformed");
    assert_eq!(body["book_id"], "MAT");
    assert_eq!(body["chapter"], 6);
    assert!(body.get("verses").is_none());
    assert!(body.get("profile_slug").is_none());
    assert!(body.get("max_words").is_none());
}

#[test]
fn test_streaming_request_sets_stream_flag() {
    let request = StudyRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .build()
        .expect("Valid request");

    let body = body_for(&request, true);

    assert_eq!(body["stream"], true);
    assert_eq!(sorted_keys(&body), vec!["messages", "model", "stream"]);
}

#[test]
fn test_request_model_overrides_client_default() {
    let request = StudyRequest::builder()
        .messages(vec![Message::new(Role::User, "Hello")])
        .model("gpt-4o".to_string())
        .build()
        .expect("Valid request");

    let body = body_for(&request, false);

    assert_eq!(body["model"], "gpt-4o");
}

#[test]
fn test_role_mapping() {
    let request = StudyRequest::builder()
        .messages(vec![
            Message::new(Role::System, "You are a study assistant."),
            Message::new(Role::User, "Hello"),
            Message::new(Role::Assistant, "Hi"),
        ])
        .build()
        .expect("Valid request");

    let body = body_for(&request, false);

    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][2]["role"], "assistant");
}

#[test]
fn test_empty_messages_rejected() {
    let request = StudyRequest::builder()
        .messages(Vec::new())
        .build()
        .expect("Valid request");

    let result = conversions::to_chat_request(&request, "gpt-4o-mini", false);

    assert!(matches!(result, Err(GamalielApiError::InvalidRequest(_))));
}
