//! Client for the Gamaliel chat-completion API.
//!
//! Gamaliel exposes an OpenAI-compatible chat-completions endpoint that
//! accepts a handful of extension fields (`theology_slug`, `profile_slug`,
//! `book_id`, `chapter`, `verses`, `max_words`) alongside the standard
//! chat fields. This crate provides a typed client for it: non-streaming
//! and streaming calls, configuration loading, and the wire conversions.
//!
//! # Example
//!
//! ```no_run
//! use gamaliel::GamalielClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GamalielClient::new(
//!         "sk-...".to_string(),
//!         "https://api.gamaliel.ai/v1".to_string(),
//!         "gpt-4o-mini".to_string(),
//!     );
//!
//!     let answer = client.ask("What does the Bible say about forgiveness?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

mod chat;
mod config;

pub use chat::{
    ChatChoice, ChatChunk, ChatDelta, ChatMessage, ChatRequest, ChatResponse, ChatStream,
    ChatUsage, ChunkChoice, GamalielApiError, GamalielClient, chunk_stream, conversions,
};
pub use chat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use config::{GamalielConfig, GamalielConfigBuilder};
