//! Song details enrichment - fetches canonical metadata for new songs.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - [`SongDetails`] and [`EnrichmentError`]
//! - **API DTOs** (`dto.rs`) - exact shape of the lookup service's JSON
//! - **Adapter** (`adapter.rs`) - converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the lookup service
//! - **Traits** (`traits.rs`) - [`SongDetailsApi`], the seam the catalog
//!   service depends on (and tests mock)
//!
//! A lookup is a single request keyed by exact song name and group. There
//! is no retry and no caching here; whether to retry is the caller's call.
//!
//! # Usage
//!
//! ```ignore
//! use song_catalog::enrichment::{SongDetailsApi, SongDetailsClient};
//!
//! let client = SongDetailsClient::new(&config.enrichment)?;
//! let details = client.fetch("Supermassive Black Hole", "Muse").await?;
//! println!("Released: {}", details.release_date);
//! ```

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use client::SongDetailsClient;
pub use domain::{EnrichmentError, SongDetails};
pub use traits::SongDetailsApi;
