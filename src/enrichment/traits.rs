//! Trait definitions for the song details lookup.
//!
//! The catalog service is generic over [`SongDetailsApi`]. Production code
//! uses [`SongDetailsClient`](super::SongDetailsClient), while tests can
//! substitute the mocks below.

use async_trait::async_trait;

use super::domain::{EnrichmentError, SongDetails};

/// Trait for fetching canonical song metadata by name and group.
#[async_trait]
pub trait SongDetailsApi: Send + Sync {
    /// Look up a song by exact name and group.
    async fn fetch(&self, name: &str, group: &str) -> Result<SongDetails, EnrichmentError>;
}

#[async_trait]
impl SongDetailsApi for super::client::SongDetailsClient {
    async fn fetch(&self, name: &str, group: &str) -> Result<SongDetails, EnrichmentError> {
        self.fetch(name, group).await
    }
}
