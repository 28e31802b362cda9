//! Possession records and derived collection snapshots
//!
//! A `PossessionRecord` exists for every (user, card) pair the user has
//! expressed an opinion about. A card with no record is implicitly
//! "not owned, not duplicate", i.e. wanted. The `duplicate` flag is
//! honoured on its own: the model does not enforce `duplicate ⇒ owned`,
//! and a loose record with `owned = false, duplicate = true` lands in
//! both derived sets, matching the stored data faithfully.

use crate::card::Card;
use crate::ids::{AlbumId, CardId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One user's opinion about one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossessionRecord {
    pub user_id: UserId,
    pub card_id: CardId,
    /// User possesses at least one copy
    pub owned: bool,
    /// User possesses a surplus copy available for trade
    pub duplicate: bool,
    /// Unix nanoseconds of the last flag change
    pub updated_at: i64,
}

impl PossessionRecord {
    /// Create a new possession record
    pub fn new(user_id: UserId, card_id: CardId, owned: bool, duplicate: bool, timestamp: i64) -> Self {
        Self {
            user_id,
            card_id,
            owned,
            duplicate,
            updated_at: timestamp,
        }
    }
}

/// Point-in-time view of one user's possession state for one album
///
/// Derived, never stored. `wanted` and `duplicates` are `BTreeSet`s so
/// iteration over a snapshot is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSnapshot {
    pub album_id: AlbumId,
    /// Cards of the album the user does not own (explicitly or by absence)
    pub wanted: BTreeSet<CardId>,
    /// Cards of the album the user holds in surplus
    pub duplicates: BTreeSet<CardId>,
    /// Number of in-album possession records behind this snapshot
    pub record_count: usize,
}

impl CollectionSnapshot {
    /// Derive a snapshot from the album's card catalogue and a user's
    /// possession records.
    ///
    /// Records referencing cards outside the album (or cards missing from
    /// the catalogue entirely) are silently ignored. Cards with no record,
    /// or a record with `owned = false`, count as wanted; cards whose
    /// record has `duplicate = true` count as duplicates, independent of
    /// the `owned` flag.
    pub fn derive(album_id: AlbumId, album_cards: &[Card], records: &[PossessionRecord]) -> Self {
        let card_set: BTreeSet<CardId> = album_cards
            .iter()
            .filter(|card| card.album_id == album_id)
            .map(|card| card.card_id)
            .collect();

        let mut owned = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        let mut record_count = 0;

        for record in records {
            if !card_set.contains(&record.card_id) {
                continue;
            }
            record_count += 1;
            if record.owned {
                owned.insert(record.card_id);
            }
            if record.duplicate {
                duplicates.insert(record.card_id);
            }
        }

        let wanted = card_set.difference(&owned).copied().collect();

        Self {
            album_id,
            wanted,
            duplicates,
            record_count,
        }
    }

    /// True when the user has no in-album possession records at all
    ///
    /// This is deliberately a statement about records, not about `wanted`:
    /// a user with zero records wants the entire album, so `wanted` is at
    /// its largest exactly when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Does the user want this card?
    pub fn wants(&self, card: &CardId) -> bool {
        self.wanted.contains(card)
    }

    /// Does the user hold this card in surplus?
    pub fn has_duplicate(&self, card: &CardId) -> bool {
        self.duplicates.contains(card)
    }
}
