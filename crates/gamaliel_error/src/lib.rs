//! Error types for the Gamaliel API SDK.
//!
//! This crate provides the foundation error types used across the Gamaliel workspace.

mod backend;
mod config;
mod http;
mod json;

pub use backend::BackendError;
pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GamalielErrorKind {
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Generic backend error
    Backend(BackendError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for GamalielErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamalielErrorKind::Http(e) => write!(f, "{}", e),
            GamalielErrorKind::Json(e) => write!(f, "{}", e),
            GamalielErrorKind::Backend(e) => write!(f, "{}", e),
            GamalielErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Gamaliel error with kind discrimination.
#[derive(Debug)]
pub struct GamalielError(Box<GamalielErrorKind>);

impl GamalielError {
    /// Create a new error from a kind.
    pub fn new(kind: GamalielErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GamalielErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GamalielError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gamaliel Error: {}", self.0)
    }
}

impl std::error::Error for GamalielError {}

// Generic From implementation for any type that converts to GamalielErrorKind
impl<T> From<T> for GamalielError
where
    T: Into<GamalielErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gamaliel operations.
pub type GamalielResult<T> = std::result::Result<T, GamalielError>;
