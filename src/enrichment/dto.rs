//! Song details API Data Transfer Objects
//!
//! These types match EXACTLY what the lookup service returns.
//! DO NOT use these types outside the enrichment module - convert to domain types.

use serde::{Deserialize, Serialize};

/// `GET /info?song=..&group=..` response body
///
/// All three fields are required; a body missing any of them is malformed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetailResponse {
    /// Release date, e.g. "16.07.2006"
    pub release_date: String,
    /// Lyrics
    pub text: String,
    /// Link to the song
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_response() {
        let json = r#"{
            "releaseDate": "16.07.2006",
            "text": "Ooh baby, don't you know I suffer?\n\nOoh\nYou set my soul alight",
            "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
        }"#;

        let response: SongDetailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.release_date, "16.07.2006");
        assert!(response.text.contains("\n\n"));
        assert!(response.link.starts_with("https://"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"releaseDate": "16.07.2006", "text": "la la"}"#;
        assert!(serde_json::from_str::<SongDetailResponse>(json).is_err());
    }
}
