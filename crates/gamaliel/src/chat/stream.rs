//! Server-sent event decoding for streaming completions.

use crate::chat::dto::{ChatChunk, GamalielApiError};
use eventsource_stream::Eventsource;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;

/// Type alias for a boxed stream of chat completion chunks.
pub type ChatStream =
    Pin<Box<dyn Stream<Item = Result<ChatChunk, GamalielApiError>> + Send + 'static>>;

/// Decodes a byte stream of server-sent events into chat chunks.
///
/// Each event's `data` payload is parsed as a [`ChatChunk`]; the literal
/// `[DONE]` sentinel ends the stream without yielding an item. The stream
/// is lazy, finite, and not restartable. Generic over the byte source so
/// it can be driven without a live connection.
pub fn chunk_stream<S, B, E>(bytes: S) -> ChatStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let stream = bytes.eventsource().filter_map(|event| async {
        match event {
            Ok(event) => {
                // Skip [DONE] message
                if event.data == "[DONE]" {
                    return None;
                }
                match serde_json::from_str::<ChatChunk>(&event.data) {
                    Ok(chunk) => Some(Ok(chunk)),
                    Err(e) => Some(Err(GamalielApiError::ResponseParsing(format!(
                        "Failed to parse chunk: {}",
                        e
                    )))),
                }
            }
            Err(e) => Some(Err(GamalielApiError::Stream(e.to_string()))),
        }
    });

    Box::pin(stream)
}
