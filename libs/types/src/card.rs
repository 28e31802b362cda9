//! Album and card catalogue types
//!
//! Albums are the unit of collection scope: every comparison between two
//! collections happens within a single album's card set. Cards carry
//! display metadata (name, team, category) that is irrelevant to matching
//! and immutable once created.

use crate::ids::{AlbumId, CardId};
use serde::{Deserialize, Serialize};

/// A collectible album (one published series of cards)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: AlbumId,
    pub name: String,
    /// Number of cards in the complete series
    pub total_cards: u32,
    pub year: Option<i32>,
    pub publisher: Option<String>,
}

impl Album {
    /// Create a new album; year and publisher can be filled in afterwards
    pub fn new(name: impl Into<String>, total_cards: u32) -> Self {
        Self {
            album_id: AlbumId::new(),
            name: name.into(),
            total_cards,
            year: None,
            publisher: None,
        }
    }
}

/// A single card in an album's catalogue
///
/// `code` is the human-facing catalogue code printed on the card
/// (e.g. "A1", "B20"). Identity for matching purposes is `card_id`;
/// everything else is display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: CardId,
    pub album_id: AlbumId,
    pub code: String,
    pub name: String,
    pub team: Option<String>,
    pub category: Option<String>,
    /// Position within the album's checklist ordering
    pub sort_order: i32,
}

impl Card {
    /// Create a new catalogue card with empty display metadata
    pub fn new(
        album_id: AlbumId,
        code: impl Into<String>,
        name: impl Into<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            card_id: CardId::new(),
            album_id,
            code: code.into(),
            name: name.into(),
            team: None,
            category: None,
            sort_order,
        }
    }
}
