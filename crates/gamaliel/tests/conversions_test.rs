//! Tests for response conversions.

use gamaliel::{
    ChatChoice, ChatChunk, ChatDelta, ChatMessage, ChatResponse, ChatUsage, ChunkChoice,
    GamalielApiError, conversions,
};

fn response_with(content: &str, usage: Option<ChatUsage>) -> ChatResponse {
    ChatResponse {
        choices: vec![ChatChoice {
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage,
    }
}

#[test]
fn test_first_choice_content_surfaces_verbatim() {
    let response = response_with(
        "Forgive, and you will be forgiven.",
        Some(ChatUsage {
            prompt_tokens: Some(12),
            completion_tokens: Some(8),
            total_tokens: Some(20),
        }),
    );

    let study = conversions::from_chat_response(&response).expect("Valid response");

    assert_eq!(study.text(), "Forgive, and you will be forgiven.");
    let usage = study.usage().as_ref().expect("Usage present");
    assert_eq!(*usage.input_tokens(), 12);
    assert_eq!(*usage.output_tokens(), 8);
    assert_eq!(*usage.total_tokens(), 20);
}

#[test]
fn test_only_first_choice_is_consumed() {
    let mut response = response_with("first", None);
    response.choices.push(ChatChoice {
        message: ChatMessage {
            role: "assistant".to_string(),
            content: "second".to_string(),
        },
        finish_reason: None,
    });

    let study = conversions::from_chat_response(&response).expect("Valid response");

    assert_eq!(study.text(), "first");
}

#[test]
fn test_no_choices_is_a_parse_error() {
    let response = ChatResponse {
        choices: Vec::new(),
        usage: None,
    };

    let result = conversions::from_chat_response(&response);

    assert!(matches!(result, Err(GamalielApiError::ResponseParsing(_))));
}

#[test]
fn test_partial_usage_maps_to_none() {
    let response = response_with(
        "text",
        Some(ChatUsage {
            prompt_tokens: Some(12),
            completion_tokens: None,
            total_tokens: Some(20),
        }),
    );

    let study = conversions::from_chat_response(&response).expect("Valid response");

    assert!(study.usage().is_none());
}

#[test]
fn test_absent_usage_maps_to_none() {
    let study =
        conversions::from_chat_response(&response_with("text", None)).expect("Valid response");

    assert!(study.usage().is_none());
}

fn chunk_with(content: Option<&str>) -> ChatChunk {
    ChatChunk {
        choices: vec![ChunkChoice {
            delta: ChatDelta {
                content: content.map(str::to_string),
            },
            finish_reason: None,
        }],
    }
}

#[test]
fn test_delta_text_extracts_fragment() {
    assert_eq!(conversions::delta_text(&chunk_with(Some("Blessed"))), Some("Blessed"));
}

#[test]
fn test_delta_text_skips_empty_and_absent_content() {
    assert!(conversions::delta_text(&chunk_with(Some(""))).is_none());
    assert!(conversions::delta_text(&chunk_with(None)).is_none());
    assert!(conversions::delta_text(&ChatChunk { choices: Vec::new() }).is_none());
}

#[test]
fn test_api_errors_convert_to_workspace_kinds() {
    use gamaliel_error::{GamalielError, GamalielErrorKind};

    let err = GamalielError::from(GamalielApiError::Http("Request failed".to_string()));
    assert!(matches!(err.kind(), GamalielErrorKind::Http(_)));

    let err = GamalielError::from(GamalielApiError::ResponseParsing("bad chunk".to_string()));
    assert!(matches!(err.kind(), GamalielErrorKind::Json(_)));

    let err = GamalielError::from(GamalielApiError::Api {
        status: 500,
        message: "server error".to_string(),
    });
    assert!(matches!(err.kind(), GamalielErrorKind::Backend(_)));
}
