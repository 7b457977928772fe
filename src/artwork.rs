//! Artwork records and image reference helpers.

use alloc::format;
use alloc::string::String;

use serde::Serialize;

/// An artwork shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Artwork {
    /// Unique identifier, also used to derive placeholder images.
    pub id: String,
    /// Title of the work.
    pub title: String,
    /// Author of the work.
    pub author: String,
    /// Year the work was made. Negative values are years BCE.
    pub year: i32,
    /// Image URL or path.
    #[serde(rename = "img")]
    pub image_ref: String,
}

impl Artwork {
    /// Creates a new artwork.
    ///
    /// Note: This function does not validate its input. Use
    /// [`parse_artworks`](crate::catalog::parse_artworks) for untrusted data.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year,
            image_ref: image_ref.into(),
        }
    }

    /// Creates an artwork whose image is the placeholder derived from `id`.
    #[must_use]
    pub fn with_placeholder(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        let id = id.into();
        let image_ref = placeholder_image(&id);
        Self::new(id, title, author, year, image_ref)
    }
}

/// Minimum number of artworks needed to start a game.
pub const MIN_ARTWORKS: usize = 2;

/// Returns the deterministic placeholder image reference for an artwork id.
///
/// ```
/// assert_eq!(
///     artswipe::artwork::placeholder_image("kiss"),
///     "https://picsum.photos/seed/kiss/1200/900"
/// );
/// ```
#[must_use]
pub fn placeholder_image(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/1200/900")
}
