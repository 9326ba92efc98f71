//! Request and response types for Gamaliel generation.

use crate::{Message, StudyOptions, TokenUsageData};
use serde::{Deserialize, Serialize};

/// A chat-completion request for the Gamaliel API.
///
/// # Examples
///
/// ```
/// use gamaliel_core::{Message, Role, StudyRequest};
///
/// let request = StudyRequest::builder()
///     .messages(vec![Message::new(Role::User, "Hello")])
///     .build()?;
///
/// assert_eq!(request.messages().len(), 1);
/// assert!(request.model().is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StudyRequest {
    /// Conversation messages in order
    messages: Vec<Message>,
    /// Model identifier override; the client default applies when absent
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// Gamaliel extension fields
    #[builder(default)]
    #[serde(default)]
    options: StudyOptions,
}

impl StudyRequest {
    /// Returns a builder for constructing a StudyRequest.
    pub fn builder() -> StudyRequestBuilder {
        StudyRequestBuilder::default()
    }
}

/// A completed generation.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StudyResponse {
    /// Generated text from the first completion choice
    text: String,
    /// Token counters, when the server reports them
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<TokenUsageData>,
}

impl StudyResponse {
    /// Returns a builder for constructing a StudyResponse.
    pub fn builder() -> StudyResponseBuilder {
        StudyResponseBuilder::default()
    }
}
