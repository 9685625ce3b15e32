//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! [`SongStore`] owns every query against the `songs` table:
//! - insert with duplicate detection
//! - filtered / sorted / paginated scans
//! - verse reads (verse splitting lives here, see [`verse`])
//! - soft delete and full-replace update
//!
//! Soft-deleted rows stay in the table; every read path filters them out
//! with `deleted = 0`.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::db::{init_db, SongStore};
//!
//! let pool = init_db(&config.database).await?;
//! let store = SongStore::new(pool);
//! let page = store.scan(&ListParams::default()).await?;
//! ```

pub mod verse;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{Sqlite, SqlitePool, SqlitePoolOptions};
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::model::{ListParams, Song, SongUpdate};

/// Columns returned for a full song row, in [`SongRow`] order.
const SONG_COLUMNS: &str = "id, release_date, name, music_group, text, link, deleted";

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool bounded by `max_connections`, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(config: &DatabaseConfig) -> Result<SqlitePool> {
    let db_url = config.url();

    if !Sqlite::database_exists(&db_url).await.unwrap_or(false) {
        tracing::info!(target: "db::songs", url = %db_url, "Creating database");
        Sqlite::create_database(&db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Raw `songs` row.
#[derive(Debug, sqlx::FromRow)]
struct SongRow {
    id: String,
    release_date: String,
    name: String,
    music_group: String,
    text: String,
    link: String,
    deleted: bool,
}

impl TryFrom<SongRow> for Song {
    type Error = Error;

    fn try_from(row: SongRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| Error::CorruptRow {
            id: row.id.clone(),
            message: e.to_string(),
        })?;

        Ok(Song {
            id,
            release_date: row.release_date,
            name: row.name,
            group: row.music_group,
            text: row.text,
            link: row.link,
            deleted: row.deleted,
        })
    }
}

/// Turn a write failure into a duplicate error when it hit the dedup index.
fn map_write_error(err: sqlx::Error, name: &str, group: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::DuplicateSong {
            name: name.to_string(),
            group: group.to_string(),
        },
        _ => Error::Database(err),
    }
}

/// Song persistence backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SongStore {
    pool: SqlitePool,
}

impl SongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new song.
    ///
    /// The row is always written as not deleted. A non-deleted song with the
    /// same name and group yields [`Error::DuplicateSong`].
    pub async fn insert(&self, song: &Song) -> Result<Song> {
        let row: SongRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO songs (id, release_date, name, music_group, text, link, deleted)
            VALUES (?, ?, ?, ?, ?, ?, 0)
            RETURNING {SONG_COLUMNS}
            "#
        ))
        .bind(song.id.to_string())
        .bind(&song.release_date)
        .bind(&song.name)
        .bind(&song.group)
        .bind(&song.text)
        .bind(&song.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &song.name, &song.group))?;

        tracing::debug!(target: "db::songs", id = %song.id, name = %song.name, "Inserted song");

        Song::try_from(row)
    }

    /// Scan non-deleted songs.
    ///
    /// The name filter is a case-sensitive literal substring match. With a
    /// sort field, ties are broken by insertion order so pages don't overlap;
    /// without one, rows come back in insertion order.
    pub async fn scan(&self, params: &ListParams) -> Result<Vec<Song>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE deleted = 0"
        ));

        if let Some(filter) = &params.filter {
            query
                .push(" AND instr(name, ")
                .push_bind(filter.clone())
                .push(") > 0");
        }

        // Column names come from the SortField safelist, never from the caller
        match params.sort {
            Some(field) => {
                query
                    .push(" ORDER BY ")
                    .push(field.column())
                    .push(if params.descending { " DESC" } else { " ASC" })
                    .push(", rowid ASC");
            }
            None => {
                query.push(" ORDER BY rowid ASC");
            }
        }

        query
            .push(" LIMIT ")
            .push_bind(i64::from(params.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(params.offset));

        let rows: Vec<SongRow> = query.build_query_as().fetch_all(&self.pool).await?;

        tracing::debug!(
            target: "db::songs",
            count = rows.len(),
            offset = params.offset,
            limit = params.limit,
            "Scanned songs"
        );

        rows.into_iter().map(Song::try_from).collect()
    }

    /// Get a non-deleted song by id.
    pub async fn get(&self, id: Uuid) -> Result<Option<Song>> {
        let row: Option<SongRow> = sqlx::query_as(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE id = ? AND deleted = 0"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Song::try_from).transpose()
    }

    /// Read the full lyric text of a non-deleted song.
    pub async fn read_text(&self, id: Uuid) -> Result<String> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT text FROM songs WHERE id = ? AND deleted = 0")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(text,)| text).ok_or(Error::NotFound(id))
    }

    /// Read one verse (1-based) of a non-deleted song's text.
    pub async fn read_verse(&self, id: Uuid, verse: i64) -> Result<String> {
        let text = self.read_text(id).await?;

        verse::verse_at(&text, verse)
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidVerse {
                verse,
                verses: verse::verse_count(&text),
            })
    }

    /// Mark a non-deleted song as deleted.
    ///
    /// Returns `false` when no row changed (missing or already deleted).
    pub async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("UPDATE songs SET deleted = 1 WHERE id = ? AND deleted = 0")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace every descriptive and enriched field of a non-deleted song.
    ///
    /// Deleted songs are not updatable and report [`Error::NotFound`].
    pub async fn update(&self, id: Uuid, update: &SongUpdate) -> Result<Song> {
        let row: Option<SongRow> = sqlx::query_as(&format!(
            r#"
            UPDATE songs
            SET release_date = ?, name = ?, music_group = ?, text = ?, link = ?
            WHERE id = ? AND deleted = 0
            RETURNING {SONG_COLUMNS}
            "#
        ))
        .bind(&update.release_date)
        .bind(&update.name)
        .bind(&update.group)
        .bind(&update.text)
        .bind(&update.link)
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &update.name, &update.group))?;

        row.map(Song::try_from).transpose()?.ok_or(Error::NotFound(id))
    }
}
