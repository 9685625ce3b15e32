//! Song details HTTP client
//!
//! Talks to the lookup service: `GET {base_url}/info?song=<name>&group=<group>`
//! answering `{"releaseDate": .., "text": .., "link": ..}`.
//!
//! Status mapping:
//! - 400 means the caller must fix the input (unknown song/group pair)
//! - any other non-2xx is treated as the service being unavailable
//! - a 2xx body that doesn't decode is a malformed response
//!
//! There is no request timeout: the caller cancels by dropping
//! the future, which aborts the in-flight request.

use super::adapter;
use super::domain::{EnrichmentError, SongDetails};
use crate::config::EnrichmentConfig;

/// Lookup service client
pub struct SongDetailsClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string sent with every lookup
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl SongDetailsClient {
    /// Create a new client for the configured lookup service
    pub fn new(config: &EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| EnrichmentError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch release date, lyrics and link for a song
    pub async fn fetch(&self, name: &str, group: &str) -> Result<SongDetails, EnrichmentError> {
        let body = self.send_info_request(name, group).await?;
        adapter::parse_song_details(&body)
    }

    /// Send the HTTP request and return the body of a successful response
    async fn send_info_request(&self, name: &str, group: &str) -> Result<Vec<u8>, EnrichmentError> {
        let url = format!("{}/info", self.base_url);

        tracing::debug!(target: "enrichment::details", song = name, group, "Looking up song details");

        let response = self
            .http_client
            .get(&url)
            .query(&[("song", name), ("group", group)])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                reason
            } else {
                body.trim().to_string()
            };

            tracing::warn!(
                target: "enrichment::details",
                status = status.as_u16(),
                song = name,
                group,
                "Lookup failed"
            );

            if status == reqwest::StatusCode::BAD_REQUEST {
                return Err(EnrichmentError::BadRequest(message));
            }
            return Err(EnrichmentError::Unavailable {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        Ok(body.to_vec())
    }
}
