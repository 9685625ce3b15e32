//! Test utilities and fixtures for song-catalog tests.
//!
//! This module provides common test helpers, mock factories, and
//! database utilities to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{temp_store, mock_song};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (store, _dir) = temp_store().await;
//!     store.insert(&mock_song("Song", "Group")).await.unwrap();
//! }
//! ```

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::db::SongStore;
use crate::model::Song;

/// Creates a temporary database for testing.
///
/// The database is created in a temporary directory that is automatically
/// cleaned up when the returned `TempDir` is dropped. Migrations are run
/// automatically.
///
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = DatabaseConfig {
        path: dir.path().join("test.db"),
        ..Default::default()
    };

    let pool = crate::db::init_db(&config)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Creates a [`SongStore`] over a temporary database.
pub async fn temp_store() -> (SongStore, TempDir) {
    let (pool, dir) = temp_db().await;
    (SongStore::new(pool), dir)
}

/// Creates a mock Song with a fresh id and placeholder enriched fields.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let song = Song {
///     text: "one\n\ntwo".to_string(),
///     ..mock_song("Song", "Group")
/// };
/// ```
pub fn mock_song(name: &str, group: &str) -> Song {
    Song {
        id: Uuid::new_v4(),
        release_date: "16.07.2006".to_string(),
        name: name.to_string(),
        group: group.to_string(),
        text: "verse one\n\nverse two".to_string(),
        link: "https://example.com/song".to_string(),
        deleted: false,
    }
}

/// Serves exactly one HTTP request with a canned response.
///
/// Returns the base URL to point a client at, and a handle resolving to the
/// request head (request line and headers) that was received.
pub async fn spawn_responder(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{addr}"), handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListParams;

    #[tokio::test]
    async fn test_temp_store_creates_working_database() {
        let (store, _dir) = temp_store().await;

        let songs = store.scan(&ListParams::default()).await.unwrap();
        assert!(songs.is_empty());
    }

    #[test]
    fn test_mock_song_defaults() {
        let song = mock_song("Song", "Group");
        assert_eq!(song.name, "Song");
        assert_eq!(song.group, "Group");
        assert!(!song.deleted);
        assert_ne!(song.id, mock_song("Song", "Group").id);
    }
}
