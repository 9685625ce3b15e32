//! Command-line interface for song-catalog.
//!
//! A thin surface over [`CatalogService`](crate::service::CatalogService):
//! decode arguments, assemble configuration, run one operation, print JSON.

mod commands;

pub use commands::{Cli, Commands, run_command};
