//! CLI command definitions and dispatch.
//!
//! Each subcommand maps onto one catalog operation; the implementations live
//! in `songs`. Configuration is assembled once here: the config file first,
//! then `--db` / `--api-url` (or their env vars) on top.

mod songs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::db::{self, SongStore};
use crate::enrichment::SongDetailsClient;
use crate::service::CatalogService;

pub use songs::{cmd_create, cmd_delete, cmd_list, cmd_show, cmd_text, cmd_update};

/// Song Catalog CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path
    #[arg(long, global = true, env = "SONG_CATALOG_DB")]
    pub db: Option<PathBuf>,

    /// Base URL of the song details service
    #[arg(long, global = true, env = "API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a song, fetching its details from the lookup service
    Create {
        /// Song name
        #[arg(long)]
        name: String,
        /// Artist or band
        #[arg(long)]
        group: String,
    },
    /// List songs
    List {
        /// Number of songs to skip
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
        /// Page size (0 = default of 10)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        limit: i64,
        /// Field to sort by: id, name, group, release_date, link
        #[arg(long)]
        sorting: Option<String>,
        /// Sort in descending order
        #[arg(long)]
        descending: bool,
        /// Case-sensitive substring of the song name
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show a single song
    Show {
        /// Song id
        id: String,
    },
    /// Print one verse of a song's lyrics
    Text {
        /// Song id
        id: String,
        /// Verse number, starting at 1
        #[arg(long, allow_hyphen_values = true)]
        verse: String,
    },
    /// Delete a song
    Delete {
        /// Song id
        id: String,
    },
    /// Replace every field of a song
    Update {
        /// Song id
        id: String,
        #[arg(long)]
        release_date: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        group: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        link: String,
    },
}

/// Build the effective configuration for this invocation.
pub(crate) fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };

    if let Some(db) = &cli.db {
        config.database.path = db.clone();
    }
    if let Some(url) = &cli.api_url {
        config.enrichment.base_url = url.clone();
    }

    Ok(config)
}

/// Run the specified CLI command.
///
/// Ctrl+C cancels the running operation; dropping it aborts any in-flight
/// lookup request and database statement.
pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let rt = Runtime::new()?;

    rt.block_on(async move {
        let pool = db::init_db(&config.database).await?;
        let details = SongDetailsClient::new(&config.enrichment)?;
        let service = CatalogService::new(SongStore::new(pool), details);

        tokio::select! {
            result = dispatch(&service, cli.command) => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("Interrupted, operation cancelled");
                anyhow::bail!("cancelled")
            }
        }
    })
}

async fn dispatch(
    service: &CatalogService<SongDetailsClient>,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Create { name, group } => cmd_create(service, name, group).await,
        Commands::List {
            offset,
            limit,
            sorting,
            descending,
            filter,
        } => cmd_list(service, offset, limit, sorting, descending, filter).await,
        Commands::Show { id } => cmd_show(service, &id).await,
        Commands::Text { id, verse } => cmd_text(service, &id, &verse).await,
        Commands::Delete { id } => cmd_delete(service, &id).await,
        Commands::Update {
            id,
            release_date,
            name,
            group,
            text,
            link,
        } => {
            let update = crate::model::SongUpdate {
                release_date,
                name,
                group,
                text,
                link,
            };
            cmd_update(service, &id, update).await
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
