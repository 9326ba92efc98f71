//! Type conversions between study types and the Gamaliel wire format.

use crate::chat::dto::{ChatChunk, ChatMessage, ChatRequest, ChatResponse, GamalielApiError};
use gamaliel_core::{Role, StudyRequest, StudyResponse, TokenUsageData};

/// Converts a StudyRequest to the wire request body.
///
/// Extension fields are passed through unmodified. A request-level model
/// override wins over the client default in `model`.
pub fn to_chat_request(
    req: &StudyRequest,
    model: &str,
    stream: bool,
) -> Result<ChatRequest, GamalielApiError> {
    if req.messages().is_empty() {
        return Err(GamalielApiError::InvalidRequest(
            "Request contains no messages".to_string(),
        ));
    }

    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            ChatMessage {
                role: role.to_string(),
                content: msg.content().clone(),
            }
        })
        .collect();

    let model = req.model().as_deref().unwrap_or(model);

    let mut builder = ChatRequest::builder();
    builder.model(model.to_string()).messages(messages);

    if stream {
        builder.stream(true);
    }

    let options = req.options();
    if let Some(slug) = options.theology_slug() {
        builder.theology_slug(slug.clone());
    }
    if let Some(slug) = options.profile_slug() {
        builder.profile_slug(slug.clone());
    }
    if let Some(passage) = options.passage() {
        builder.book_id(passage.book_id().clone());
        builder.chapter(*passage.chapter());
        if let Some(verses) = passage.verses() {
            builder.verses(verses.clone());
        }
    }
    if let Some(max_words) = options.max_words() {
        builder.max_words(*max_words);
    }

    builder
        .build()
        .map_err(|e| GamalielApiError::Builder(format!("Failed to build request: {}", e)))
}

/// Converts a wire response to a StudyResponse.
///
/// Only the first choice's content is consumed; a response with no
/// choices is a parse error.
pub fn from_chat_response(response: &ChatResponse) -> Result<StudyResponse, GamalielApiError> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| GamalielApiError::ResponseParsing("No choices in response".to_string()))?;

    // Usage maps only when the server reports all three counters
    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsageData::new(
                input as u64,
                output as u64,
                total as u64,
            )),
            _ => None,
        }
    });

    StudyResponse::builder()
        .text(text)
        .usage(usage)
        .build()
        .map_err(|e| GamalielApiError::Builder(format!("Failed to build response: {}", e)))
}

/// Extracts the text fragment from a streaming chunk.
///
/// Returns `None` for chunks with no choices, an absent delta, or an
/// empty fragment, so callers can print the result unconditionally.
pub fn delta_text(chunk: &ChatChunk) -> Option<&str> {
    chunk
        .choices
        .first()
        .and_then(|choice| choice.delta.content.as_deref())
        .filter(|fragment| !fragment.is_empty())
}
