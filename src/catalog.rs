//! Artwork catalog: the built-in list and validation of fetched lists.
//!
//! A front end fetches [`ARTWORKS_PATH`] and hands the body to
//! [`Catalog::from_payload`]. Anything that goes wrong along the way
//! (transport failure, bad JSON, too few usable entries) leaves the
//! built-in list in place and produces a short [`Catalog::notice`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::artwork::{Artwork, MIN_ARTWORKS, placeholder_image};
use crate::error::CatalogError;

/// Well-known path of the remote artwork list.
pub const ARTWORKS_PATH: &str = "/obras.json";

/// Informational message shown when the built-in list is used as a fallback.
pub const FALLBACK_NOTICE: &str = "Using built-in artworks (no /obras.json found)";

const BUILTIN: [(&str, &str, &str, i32); 10] = [
    ("monalisa", "Mona Lisa", "Leonardo da Vinci", 1506),
    ("birthofvenus", "The Birth of Venus", "Sandro Botticelli", 1486),
    ("nightwatch", "The Night Watch", "Rembrandt", 1642),
    ("girlpearl", "Girl with a Pearl Earring", "Johannes Vermeer", 1665),
    ("starrynight", "The Starry Night", "Vincent van Gogh", 1889),
    ("scream", "The Scream", "Edvard Munch", 1893),
    ("americangothic", "American Gothic", "Grant Wood", 1930),
    ("persistence", "The Persistence of Memory", "Salvador Dalí", 1931),
    ("guernica", "Guernica", "Pablo Picasso", 1937),
    ("kiss", "The Kiss", "Gustav Klimt", 1908),
];

/// Returns the built-in artwork list.
#[must_use]
pub fn builtin_artworks() -> Vec<Artwork> {
    BUILTIN
        .iter()
        .map(|&(id, title, author, year)| Artwork::with_placeholder(id, title, author, year))
        .collect()
}

/// Where the loaded artworks came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    /// The built-in list.
    BuiltIn,
    /// A fetched list that passed validation.
    Remote,
}

/// The artwork set a game draws its decks from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    source: CatalogSource,
    fallback: Option<CatalogError>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Creates a catalog holding the built-in list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            artworks: builtin_artworks(),
            source: CatalogSource::BuiltIn,
            fallback: None,
        }
    }

    /// Creates a catalog from a fetched payload, falling back to the
    /// built-in list if the payload is unusable.
    #[must_use]
    pub fn from_payload(payload: &str) -> Self {
        match parse_artworks(payload) {
            Ok(artworks) => {
                info!(count = artworks.len(), "loaded remote artwork list");
                Self {
                    artworks,
                    source: CatalogSource::Remote,
                    fallback: None,
                }
            }
            Err(reason) => Self::fallback(reason),
        }
    }

    /// Creates a catalog holding the built-in list because the remote list
    /// was rejected for `reason`.
    #[must_use]
    pub fn fallback(reason: CatalogError) -> Self {
        warn!(%reason, "falling back to built-in artworks");
        Self {
            fallback: Some(reason),
            ..Self::builtin()
        }
    }

    /// Returns the loaded artworks.
    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Consumes the catalog and returns its artworks.
    #[must_use]
    pub fn into_artworks(self) -> Vec<Artwork> {
        self.artworks
    }

    /// Returns where the artworks came from.
    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        self.source
    }

    /// Returns why the remote list was rejected, if it was.
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<CatalogError> {
        self.fallback
    }

    /// Returns the informational message to show the player, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self.fallback {
            Some(_) => Some(FALLBACK_NOTICE),
            None => None,
        }
    }
}

/// Parses and validates a JSON artwork list.
///
/// Each element may carry `id`, `title`, `author`, `year` and `img`.
/// Elements without a non-empty `id`, `title` or `author`, or whose `year`
/// does not coerce to a finite number, are dropped. A missing or blank
/// `img` is replaced by [`placeholder_image`]. Later duplicates of an id are
/// dropped.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON array or fewer than
/// [`MIN_ARTWORKS`] elements are valid.
pub fn parse_artworks(payload: &str) -> Result<Vec<Artwork>, CatalogError> {
    let value: Value = serde_json::from_str(payload).map_err(|_| CatalogError::Malformed)?;
    let Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray);
    };

    let mut seen = HashSet::new();
    let mut artworks = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(artwork) = normalize(item) else {
            debug!(index, "dropping invalid artwork entry");
            continue;
        };
        if !seen.insert(artwork.id.clone()) {
            debug!(index, id = %artwork.id, "dropping duplicate artwork id");
            continue;
        }
        artworks.push(artwork);
    }

    if artworks.len() < MIN_ARTWORKS {
        return Err(CatalogError::InsufficientArtworks {
            valid: artworks.len(),
        });
    }

    Ok(artworks)
}

fn normalize(item: &Value) -> Option<Artwork> {
    let id = coerce_id(item.get("id")?)?;
    let title = non_blank(item.get("title")?)?;
    let author = non_blank(item.get("author")?)?;
    let year = coerce_year(item.get("year")?)?;
    let image_ref = item
        .get("img")
        .and_then(non_blank)
        .unwrap_or_else(|| placeholder_image(&id));

    Some(Artwork {
        id,
        title,
        author,
        year,
        image_ref,
    })
}

fn non_blank(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => {
            let integral = n.is_i64() || n.is_u64();
            (integral && n.as_u64() != Some(0)).then(|| n.to_string())
        }
        other => non_blank(other),
    }
}

#[cfg(feature = "std")]
fn truncate(year: f64) -> f64 {
    year.trunc()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn truncate(year: f64) -> f64 {
    libm::trunc(year)
}

fn coerce_year(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if !year.is_finite() {
        return None;
    }

    let year = truncate(year);
    if year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return None;
    }
    Some(year as i32)
}
