//! Error types for catalog loading and device feedback.

use thiserror::Error;

/// Reasons a fetched artwork list was rejected.
///
/// None of these are fatal: the catalog falls back to the built-in list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The list could not be fetched (transport failure or non-OK response).
    #[error("artwork list unavailable")]
    Unavailable,
    /// The payload is not valid JSON.
    #[error("artwork list is not valid JSON")]
    Malformed,
    /// The payload is JSON but not an array.
    #[error("artwork list is not an array")]
    NotAnArray,
    /// Too few entries survived validation.
    #[error("artwork list has {valid} valid entries, at least 2 are required")]
    InsufficientArtworks {
        /// Number of entries that passed validation.
        valid: usize,
    },
}

/// Errors reported by a haptics device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HapticsError {
    /// The device has no vibration support.
    #[error("vibration is not supported")]
    Unsupported,
    /// The device refused the request.
    #[error("vibration request was rejected")]
    Rejected,
}
