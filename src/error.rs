//! Application-wide error types.
//!
//! Library modules return [`Result`] with the unified [`Error`] enum, while
//! the CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level catalog error enum
//! - [`EnrichmentError`]: failures at the metadata lookup boundary
//! - [`ErrorKind`]: the stable classification a caller switches on
//!
//! Errors are wrapped with operation context on their way up
//! ([`Error::context`]), but [`Error::kind`] always reports the kind of the
//! innermost error, so wrapping never changes how a caller reacts.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::error::{ErrorKind, Result};
//!
//! match service.get_text(id, 4).await {
//!     Err(e) if e.kind() == ErrorKind::InvalidVerse => { /* 400 */ }
//!     Err(e) if e.kind() == ErrorKind::NotFound => { /* 404 */ }
//!     other => { /* ... */ }
//! }
//! ```

use uuid::Uuid;

use crate::enrichment::EnrichmentError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level catalog error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No non-deleted song matches the id
    #[error("Song not found: {0}")]
    NotFound(Uuid),

    /// Verse index outside `1..=verses`
    #[error("Verse {verse} is not valid (song has {verses} verses)")]
    InvalidVerse { verse: i64, verses: usize },

    /// A non-deleted song with the same name and group already exists
    #[error("Song already exists: {name} by {group}")]
    DuplicateSong { name: String, group: String },

    /// Metadata lookup failed
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// Malformed caller input
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into a song
    #[error("Corrupt row {id}: {message}")]
    CorruptRow { id: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Classification of an [`Error`], independent of any context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidVerse,
    DuplicateConflict,
    RemoteBadRequest,
    RemoteUnavailable,
    MalformedResponse,
    Validation,
    Storage,
}

impl Error {
    /// Create a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The kind of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidVerse { .. } => ErrorKind::InvalidVerse,
            Self::DuplicateSong { .. } => ErrorKind::DuplicateConflict,
            Self::Enrichment(e) => e.kind(),
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Database(_) | Self::Migration(_) | Self::CorruptRow { .. } => ErrorKind::Storage,
            Self::WithContext { source, .. } => source.kind(),
        }
    }
}

impl EnrichmentError {
    /// Map an enrichment failure onto the catalog error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnrichmentError::BadRequest(_) => ErrorKind::RemoteBadRequest,
            EnrichmentError::Unavailable { .. } | EnrichmentError::Network(_) => {
                ErrorKind::RemoteUnavailable
            }
            EnrichmentError::Parse(_) => ErrorKind::MalformedResponse,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Database(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, EnrichmentError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Enrichment(e).context(ctx))
    }
}
