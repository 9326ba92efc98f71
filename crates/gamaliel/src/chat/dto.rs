//! Data transfer objects for the Gamaliel wire format.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// Chat completion request body.
///
/// Standard fields plus the Gamaliel extension fields at the top level.
/// Absent options are omitted from the serialized body entirely, never
/// sent as null.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Enable streaming
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    /// Theology preset identifier
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    theology_slug: Option<String>,
    /// User profile identifier
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_slug: Option<String>,
    /// Book identifier
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    book_id: Option<String>,
    /// Chapter number
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    chapter: Option<u32>,
    /// Verse numbers within the chapter
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    verses: Option<Vec<u32>>,
    /// Maximum output length in words
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_words: Option<u32>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A choice in a non-streaming response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChatMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// Non-streaming chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// Incremental content in a streaming choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatDelta {
    /// Text fragment, absent in role-only or terminal chunks
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in a streaming chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkChoice {
    /// The incremental delta
    #[serde(default)]
    pub delta: ChatDelta,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// One server-sent event's worth of streaming response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChunk {
    /// Chunk choices; may be empty
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

/// Errors from the Gamaliel API.
#[derive(Debug, Clone, derive_more::Display)]
pub enum GamalielApiError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Invalid request
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Streaming transport error
    #[display("Stream error: {}", _0)]
    Stream(String),

    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl std::error::Error for GamalielApiError {}

impl From<GamalielApiError> for gamaliel_error::GamalielErrorKind {
    fn from(err: GamalielApiError) -> Self {
        match err {
            GamalielApiError::Http(message) => gamaliel_error::HttpError::new(message).into(),
            GamalielApiError::ResponseParsing(message) => {
                gamaliel_error::JsonError::new(message).into()
            }
            other => gamaliel_error::BackendError::new(other.to_string()).into(),
        }
    }
}
