//! HTTP client for the Gamaliel API.

use crate::chat::conversions;
use crate::chat::dto::{ChatResponse, GamalielApiError};
use crate::chat::stream::{ChatStream, chunk_stream};
use crate::config::GamalielConfig;
use gamaliel_core::{Message, Role, StudyRequest, StudyResponse};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Endpoint for the hosted Gamaliel API.
pub const DEFAULT_BASE_URL: &str = "https://api.gamaliel.ai/v1";

/// Model used when neither the client nor the request overrides it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Client for the Gamaliel chat-completions endpoint.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GamalielClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GamalielClient {
    /// Creates a new client bound to the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer credential for authentication
    /// * `base_url` - Base URL of the API endpoint
    /// * `model` - Default model identifier for requests
    #[instrument(skip(api_key), fields(model = %model, url = %base_url))]
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::new();

        debug!(model = %model, url = %base_url, "Created Gamaliel client");

        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    /// Creates a client from a loaded configuration.
    pub fn from_config(config: &GamalielConfig) -> Self {
        Self::new(
            config.api_key().clone(),
            config.base_url().clone(),
            config.model().clone(),
        )
    }

    /// Generates a complete response for the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a non-2xx
    /// status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(&self, req: &StudyRequest) -> Result<StudyResponse, GamalielApiError> {
        let chat_request = conversions::to_chat_request(req, &self.model, false)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GamalielApiError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GamalielApiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GamalielApiError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }

    /// Generates a streaming response for the request.
    ///
    /// Returns a stream of chunks that suspends between fragments until
    /// the server signals completion. The `[DONE]` sentinel never surfaces
    /// as an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports a
    /// non-2xx status. Mid-stream failures surface as `Err` items.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate_stream(&self, req: &StudyRequest) -> Result<ChatStream, GamalielApiError> {
        let chat_request = conversions::to_chat_request(req, &self.model, true)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending streaming chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GamalielApiError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GamalielApiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(chunk_stream(response.bytes_stream()))
    }

    /// Sends a single user message and returns the response text.
    ///
    /// Convenience method for simple single-turn conversations with no
    /// extension fields.
    pub async fn ask(&self, prompt: &str) -> Result<String, GamalielApiError> {
        let request = StudyRequest::builder()
            .messages(vec![Message::new(Role::User, prompt)])
            .build()
            .map_err(|e| GamalielApiError::Builder(format!("Failed to build request: {}", e)))?;

        let response = self.generate(&request).await?;
        Ok(response.text().clone())
    }

    /// Returns the base URL of the endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default model identifier.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
