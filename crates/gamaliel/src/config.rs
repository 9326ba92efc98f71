//! Configuration for the Gamaliel client.

use crate::chat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use derive_getters::Getters;
use gamaliel_error::{ConfigError, GamalielError, GamalielResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the API credential.
pub const ENV_API_KEY: &str = "GAMALIEL_API_KEY";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "GAMALIEL_BASE_URL";
/// Environment variable overriding the model.
pub const ENV_MODEL: &str = "GAMALIEL_MODEL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Client configuration.
///
/// The base URL and model fall back to the hosted endpoint defaults when
/// absent from the source; the credential is always required.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GamalielConfig {
    /// Bearer credential for the API
    api_key: String,
    /// Base URL of the endpoint
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Default model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
}

impl GamalielConfig {
    /// Returns a builder for constructing a GamalielConfig.
    pub fn builder() -> GamalielConfigBuilder {
        GamalielConfigBuilder::default()
    }

    /// Load configuration from `GAMALIEL_*` environment variables.
    ///
    /// Callers typically load a `.env` file with `dotenvy` first. The
    /// credential is required; base URL and model are optional overrides.
    #[tracing::instrument]
    pub fn from_env() -> GamalielResult<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| {
            GamalielError::from(ConfigError::new(format!("{} is not set", ENV_API_KEY)))
        })?;

        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url());
        let model = std::env::var(ENV_MODEL).unwrap_or_else(|_| default_model());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> GamalielResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GamalielError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            GamalielError::from(ConfigError::new(format!("Failed to parse config: {}", e)))
        })
    }
}
