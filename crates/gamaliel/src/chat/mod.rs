//! Chat completions against the Gamaliel endpoint.
//!
//! The wire format is the OpenAI chat-completions contract with the
//! Gamaliel extension fields serialized at the top level of the request
//! body. Streaming responses arrive as server-sent events terminated by
//! a `[DONE]` sentinel.

mod client;
pub mod conversions;
mod dto;
mod stream;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GamalielClient};
pub use dto::{
    ChatChoice, ChatChunk, ChatDelta, ChatMessage, ChatRequest, ChatResponse, ChatUsage,
    ChunkChoice, GamalielApiError,
};
pub use stream::{ChatStream, chunk_stream};
