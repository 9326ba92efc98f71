//! Gamaliel-specific request options.

use crate::Passage;
use serde::{Deserialize, Serialize};

/// Extension fields recognized by the Gamaliel endpoint.
///
/// All fields are optional pass-through values. Nothing is validated
/// locally; unknown slugs surface as server-side errors.
///
/// # Examples
///
/// ```
/// use gamaliel_core::{Passage, StudyOptions};
///
/// let options = StudyOptions::builder()
///     .theology_slug("reformed".to_string())
///     .passage(Passage::new("MAT", 6))
///     .max_words(300_u32)
///     .build()?;
///
/// assert_eq!(options.theology_slug().as_deref(), Some("reformed"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct StudyOptions {
    /// Theology preset identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theology_slug: Option<String>,
    /// User profile identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_slug: Option<String>,
    /// Scripture span the request is anchored to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passage: Option<Passage>,
    /// Maximum output length in words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_words: Option<u32>,
}

impl StudyOptions {
    /// Returns a builder for constructing StudyOptions.
    pub fn builder() -> StudyOptionsBuilder {
        StudyOptionsBuilder::default()
    }
}
