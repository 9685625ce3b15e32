//! Core data models for the song catalog.
//!
//! Defines the [`Song`] entity, the inputs that create and replace it
//! ([`NewSong`], [`SongUpdate`]) and the listing descriptor
//! ([`ListQuery`] as received, [`ListParams`] once validated).
//!
//! # Database Schema
//!
//! Songs map to the `songs` table. `music_group` holds [`Song::group`]
//! (`group` is an SQL keyword) and `deleted` is the soft-delete flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A song record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Server-assigned identifier
    pub id: Uuid,
    /// Free-form display date from the metadata lookup
    pub release_date: String,
    /// Song title
    pub name: String,
    /// Artist or ensemble
    #[serde(rename = "musicGroup")]
    pub group: String,
    /// Full lyric text, verses separated by a blank line
    pub text: String,
    /// External link
    pub link: String,
    /// Soft-delete marker
    #[serde(default)]
    pub deleted: bool,
}

/// Caller input for creating a song.
///
/// Release date, text and link are not part of it: they always come from
/// the metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSong {
    pub name: String,
    #[serde(rename = "musicGroup")]
    pub group: String,
}

impl NewSong {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Full replacement of a song's descriptive and enriched fields.
///
/// Every field is required; there is no merge with the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongUpdate {
    pub release_date: String,
    pub name: String,
    #[serde(rename = "musicGroup")]
    pub group: String,
    pub text: String,
    pub link: String,
}

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Group,
    ReleaseDate,
    Link,
}

impl SortField {
    /// The SQL column for this field.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Group => "music_group",
            SortField::ReleaseDate => "release_date",
            SortField::Link => "link",
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "group" | "music_group" | "musicGroup" => Ok(SortField::Group),
            "release_date" | "releaseDate" => Ok(SortField::ReleaseDate),
            "link" => Ok(SortField::Link),
            other => Err(Error::validation(
                "sorting",
                format!("cannot sort by {other:?}"),
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Listing input as received from a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub offset: i64,
    pub limit: i64,
    pub sorting: Option<String>,
    pub descending: bool,
    pub filter: Option<String>,
}

/// Validated listing descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub offset: u32,
    pub limit: u32,
    pub sort: Option<SortField>,
    pub descending: bool,
    /// Case-sensitive substring of the song name
    pub filter: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            sort: None,
            descending: false,
            filter: None,
        }
    }
}

impl TryFrom<ListQuery> for ListParams {
    type Error = Error;

    fn try_from(query: ListQuery) -> Result<Self> {
        let offset = u32::try_from(query.offset)
            .map_err(|_| Error::validation("offset", format!("{} is out of range", query.offset)))?;

        let limit = match query.limit {
            0 => DEFAULT_LIMIT,
            n => u32::try_from(n)
                .map_err(|_| Error::validation("limit", format!("{n} is out of range")))?,
        };

        let sort = query
            .sorting
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(SortField::from_str)
            .transpose()?;

        let filter = query.filter.filter(|f| !f.is_empty());

        Ok(Self {
            offset,
            limit,
            sort,
            descending: query.descending,
            filter,
        })
    }
}

/// Parse a song identifier supplied as text.
pub fn parse_song_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|e| Error::validation("id", e.to_string()))
}

/// Parse a verse index supplied as text.
///
/// Only checks that the value is numeric; range checking happens against
/// the stored text.
pub fn parse_verse_index(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| Error::validation("verse", format!("{raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_sort_field_safelist() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("musicGroup".parse::<SortField>().unwrap(), SortField::Group);
        assert_eq!(
            "releaseDate".parse::<SortField>().unwrap().column(),
            "release_date"
        );

        for hostile in ["text; DROP TABLE songs", "name DESC", "NAME", "deleted", "1"] {
            let err = hostile.parse::<SortField>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "{hostile}");
        }
    }

    #[test]
    fn test_list_params_defaults_limit() {
        let params = ListParams::try_from(ListQuery::default()).unwrap();
        assert_eq!(params, ListParams::default());
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_list_params_validation() {
        let negative_offset = ListQuery {
            offset: -1,
            ..Default::default()
        };
        assert_eq!(
            ListParams::try_from(negative_offset).unwrap_err().kind(),
            ErrorKind::Validation
        );

        let negative_limit = ListQuery {
            limit: -5,
            ..Default::default()
        };
        assert_eq!(
            ListParams::try_from(negative_limit).unwrap_err().kind(),
            ErrorKind::Validation
        );

        let bad_sort = ListQuery {
            sorting: Some("password".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ListParams::try_from(bad_sort).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_list_params_empty_strings_are_unset() {
        let query = ListQuery {
            offset: 2,
            limit: 2,
            sorting: Some(String::new()),
            descending: true,
            filter: Some(String::new()),
        };
        let params = ListParams::try_from(query).unwrap();
        assert_eq!(params.offset, 2);
        assert_eq!(params.limit, 2);
        assert_eq!(params.sort, None);
        assert_eq!(params.filter, None);
        assert!(params.descending);
    }

    #[test]
    fn test_parse_inputs() {
        let id = Uuid::new_v4();
        assert_eq!(parse_song_id(&id.to_string()).unwrap(), id);
        assert_eq!(
            parse_song_id("not-a-uuid").unwrap_err().kind(),
            ErrorKind::Validation
        );

        assert_eq!(parse_verse_index(" 3 ").unwrap(), 3);
        assert_eq!(parse_verse_index("-1").unwrap(), -1);
        assert_eq!(
            parse_verse_index("two").unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_song_json_shape() {
        let song = Song {
            id: Uuid::nil(),
            release_date: "16.07.2006".to_string(),
            name: "Supermassive Black Hole".to_string(),
            group: "Muse".to_string(),
            text: "verse".to_string(),
            link: "https://example.com".to_string(),
            deleted: false,
        };
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["releaseDate"], "16.07.2006");
        assert_eq!(json["musicGroup"], "Muse");
    }
}
