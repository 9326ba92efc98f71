//! Passage references anchoring a request to scripture.

use serde::{Deserialize, Serialize};

/// A reference to a span of scripture.
///
/// Book identifiers, chapter, and verse numbers are carried as opaque
/// values and sent to the server unmodified. The server is the authority
/// on which identifiers exist.
///
/// # Examples
///
/// ```
/// use gamaliel_core::Passage;
///
/// let passage = Passage::new("MAT", 6).with_verses(vec![14, 15]);
///
/// assert_eq!(passage.book_id(), "MAT");
/// assert_eq!(*passage.chapter(), 6);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Passage {
    /// Book identifier, e.g. "MAT"
    book_id: String,
    /// Chapter number
    chapter: u32,
    /// Specific verses within the chapter
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verses: Option<Vec<u32>>,
}

impl Passage {
    /// Creates a passage reference for a whole chapter.
    pub fn new(book_id: impl Into<String>, chapter: u32) -> Self {
        Self {
            book_id: book_id.into(),
            chapter,
            verses: None,
        }
    }

    /// Narrows the reference to specific verses.
    pub fn with_verses(mut self, verses: Vec<u32>) -> Self {
        self.verses = Some(verses);
        self
    }

    /// Returns a builder for constructing a Passage.
    pub fn builder() -> PassageBuilder {
        PassageBuilder::default()
    }
}
