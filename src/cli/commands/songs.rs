//! Song catalog commands.

use tracing::info;

use crate::enrichment::SongDetailsClient;
use crate::model::{self, ListQuery, NewSong, SongUpdate};
use crate::service::CatalogService;

use super::print_json;

type Service = CatalogService<SongDetailsClient>;

/// Create a song from its name and group
pub async fn cmd_create(service: &Service, name: String, group: String) -> anyhow::Result<()> {
    let song = service.create_song(NewSong::new(name, group)).await?;
    info!(id = %song.id, "Song created");
    print_json(&song)
}

/// Print one page of songs
pub async fn cmd_list(
    service: &Service,
    offset: i64,
    limit: i64,
    sorting: Option<String>,
    descending: bool,
    filter: Option<String>,
) -> anyhow::Result<()> {
    let query = ListQuery {
        offset,
        limit,
        sorting,
        descending,
        filter,
    };
    let songs = service.get_songs(query).await?;
    print_json(&songs)
}

/// Print a single song
pub async fn cmd_show(service: &Service, id: &str) -> anyhow::Result<()> {
    let id = model::parse_song_id(id)?;
    let song = service.get_song(id).await?;
    print_json(&song)
}

/// Print one verse
pub async fn cmd_text(service: &Service, id: &str, verse: &str) -> anyhow::Result<()> {
    let id = model::parse_song_id(id)?;
    let verse = model::parse_verse_index(verse)?;
    let text = service.get_text(id, verse).await?;
    println!("{}", text);
    Ok(())
}

/// Soft-delete a song
pub async fn cmd_delete(service: &Service, id: &str) -> anyhow::Result<()> {
    let id = model::parse_song_id(id)?;
    service.delete_song(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

/// Replace a song's fields
pub async fn cmd_update(service: &Service, id: &str, update: SongUpdate) -> anyhow::Result<()> {
    let id = model::parse_song_id(id)?;
    let song = service.update_song(id, update).await?;
    print_json(&song)
}
