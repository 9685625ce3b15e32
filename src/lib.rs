//! Song Catalog - a catalog of song records with lyrics.
//!
//! Songs are created from a name and group, enriched with release date,
//! lyrics and link from an external lookup service, and stored in SQLite.
//! They can be listed (filtered, sorted, paginated), read verse by verse,
//! updated and soft-deleted.
//!
//! - [`service::CatalogService`] is the entry point for all operations
//! - [`db::SongStore`] owns persistence and verse extraction
//! - [`enrichment::SongDetailsClient`] talks to the lookup service
//! - [`config::Config`] is loaded once and passed to both

pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod service;
#[cfg(test)]
pub mod test_utils;
