//! Catalog service - orchestrates the song lifecycle.
//!
//! Creation is the only multi-step flow:
//! 1. Look up release date, lyrics and link for the (name, group) pair
//! 2. Build the full record with a fresh id, discarding nothing but what
//!    the lookup returned
//! 3. Insert it
//!
//! The lookup happens strictly before any write, so a failed or cancelled
//! lookup never leaves a row behind. Everything else is a pass-through to
//! [`SongStore`]; verse splitting and bounds checks live in the store.
//!
//! Errors are wrapped with the operation name; [`Error::kind`] still reports
//! the original kind.

use uuid::Uuid;

use crate::db::SongStore;
use crate::enrichment::{SongDetails, SongDetailsApi};
use crate::error::{Error, Result, ResultExt};
use crate::model::{ListParams, ListQuery, NewSong, Song, SongUpdate};

/// Song catalog operations.
pub struct CatalogService<D> {
    store: SongStore,
    details: D,
}

impl<D: SongDetailsApi> CatalogService<D> {
    pub fn new(store: SongStore, details: D) -> Self {
        Self { store, details }
    }

    /// Create a song, enriching it from the lookup service first.
    pub async fn create_song(&self, song: NewSong) -> Result<Song> {
        let details = self
            .details
            .fetch(&song.name, &song.group)
            .await
            .with_context(format!("looking up {:?} by {:?}", song.name, song.group))?;

        let record = enriched_song(song, details);

        let created = self
            .store
            .insert(&record)
            .await
            .with_context("creating song")?;

        tracing::info!(
            target: "catalog::create",
            id = %created.id,
            name = %created.name,
            group = %created.group,
            "Song created"
        );

        Ok(created)
    }

    /// List non-deleted songs.
    pub async fn get_songs(&self, query: ListQuery) -> Result<Vec<Song>> {
        let params = ListParams::try_from(query)?;
        tracing::debug!(target: "catalog::list", ?params, "Listing songs");

        self.store.scan(&params).await.with_context("listing songs")
    }

    /// A single non-deleted song.
    pub async fn get_song(&self, id: Uuid) -> Result<Song> {
        self.store
            .get(id)
            .await
            .with_context("reading song")?
            .ok_or(Error::NotFound(id))
    }

    /// One verse (1-based) of a song's lyrics.
    pub async fn get_text(&self, id: Uuid, verse: i64) -> Result<String> {
        self.store
            .read_verse(id, verse)
            .await
            .with_context(format!("reading verse {verse} of {id}"))
    }

    /// Soft-delete a song.
    pub async fn delete_song(&self, id: Uuid) -> Result<()> {
        let deleted = self
            .store
            .soft_delete(id)
            .await
            .with_context("deleting song")?;

        if !deleted {
            return Err(Error::NotFound(id).context("deleting song"));
        }

        tracing::info!(target: "catalog::delete", %id, "Song deleted");
        Ok(())
    }

    /// Replace a song's fields. No lookup is made; the values are trusted.
    pub async fn update_song(&self, id: Uuid, update: SongUpdate) -> Result<Song> {
        let updated = self
            .store
            .update(id, &update)
            .await
            .with_context("updating song")?;

        tracing::info!(target: "catalog::update", %id, "Song updated");
        Ok(updated)
    }
}

/// Build the record to persist from caller input and looked-up details.
fn enriched_song(song: NewSong, details: SongDetails) -> Song {
    Song {
        id: Uuid::new_v4(),
        release_date: details.release_date,
        name: song.name,
        group: song.group,
        text: details.text,
        link: details.link,
        deleted: false,
    }
}
