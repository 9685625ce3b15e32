//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the lookup API changes.
//! Responses get converted into these types via the adapter.

/// Canonical metadata for a song, as returned by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    /// Free-form display date (not necessarily ISO)
    pub release_date: String,
    /// Full lyric text, verses separated by a blank line
    pub text: String,
    /// External link
    pub link: String,
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    /// The lookup rejected the request (e.g. unknown song/group pair)
    #[error("Lookup rejected the request: {0}")]
    BadRequest(String),

    /// Any other non-success status
    #[error("Lookup service returned HTTP {status}: {message}")]
    Unavailable { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
