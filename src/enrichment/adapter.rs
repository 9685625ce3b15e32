//! Adapter layer: Convert lookup DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::domain::{EnrichmentError, SongDetails};
use super::dto;

/// Convert a lookup response to [`SongDetails`]
pub fn to_song_details(response: dto::SongDetailResponse) -> SongDetails {
    SongDetails {
        release_date: response.release_date,
        text: response.text,
        link: response.link,
    }
}

/// Decode a raw response body into [`SongDetails`]
pub fn parse_song_details(body: &[u8]) -> Result<SongDetails, EnrichmentError> {
    serde_json::from_slice::<dto::SongDetailResponse>(body)
        .map(to_song_details)
        .map_err(|e| EnrichmentError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_details() {
        let body = br#"{"releaseDate":"01.01.2000","text":"a\n\nb","link":"https://x.test"}"#;
        let details = parse_song_details(body).unwrap();
        assert_eq!(
            details,
            SongDetails {
                release_date: "01.01.2000".to_string(),
                text: "a\n\nb".to_string(),
                link: "https://x.test".to_string(),
            }
        );
    }

    #[test]
    fn test_garbage_body_is_parse_error() {
        let result = parse_song_details(b"<html>oops</html>");
        assert!(matches!(result, Err(EnrichmentError::Parse(_))));

        let result = parse_song_details(br#"{"releaseDate": 2006}"#);
        assert!(matches!(result, Err(EnrichmentError::Parse(_))));
    }
}
