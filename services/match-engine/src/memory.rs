//! In-memory directory implementation
//!
//! Reference backing for the [`Directory`](crate::directory::Directory)
//! trait: a user registry, the album/card catalogue, and possession
//! records with last-write-wins upsert semantics. Serves tests, examples
//! and any embedding that has no external store.
//!
//! All state lives in `BTreeMap`s so enumeration order is deterministic.

use std::collections::BTreeMap;

use types::card::{Album, Card};
use types::collection::{CollectionSnapshot, PossessionRecord};
use types::errors::DirectoryError;
use types::ids::{AlbumId, CardId, UserId};
use types::user::User;

use crate::directory::Directory;

/// In-memory user directory and card catalogue
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: BTreeMap<UserId, User>,
    albums: BTreeMap<AlbumId, Album>,
    cards: BTreeMap<CardId, Card>,
    possessions: BTreeMap<(UserId, CardId), PossessionRecord>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user
    pub fn add_user(&mut self, user: User) -> UserId {
        let id = user.user_id;
        self.users.insert(id, user);
        id
    }

    /// Register an album
    pub fn add_album(&mut self, album: Album) -> AlbumId {
        let id = album.album_id;
        self.albums.insert(id, album);
        id
    }

    /// Register a catalogue card
    pub fn add_card(&mut self, card: Card) -> CardId {
        let id = card.card_id;
        self.cards.insert(id, card);
        id
    }

    /// Upsert a user's opinion about a card (last write wins)
    pub fn set_possession(
        &mut self,
        user: UserId,
        card: CardId,
        owned: bool,
        duplicate: bool,
        timestamp: i64,
    ) {
        self.possessions.insert(
            (user, card),
            PossessionRecord::new(user, card, owned, duplicate, timestamp),
        );
    }

    /// Remove a user's record for a card, restoring the implicit
    /// "not owned, not duplicate" state
    pub fn remove_possession(&mut self, user: UserId, card: CardId) -> bool {
        self.possessions.remove(&(user, card)).is_some()
    }

    /// All catalogue cards belonging to an album, in insertion-id order
    pub fn cards_in_album(&self, album: AlbumId) -> Vec<Card> {
        self.cards
            .values()
            .filter(|card| card.album_id == album)
            .cloned()
            .collect()
    }

    /// All possession records for a user
    pub fn records_for(&self, user: UserId) -> Vec<PossessionRecord> {
        self.possessions
            .values()
            .filter(|record| record.user_id == user)
            .copied()
            .collect()
    }
}

impl Directory for InMemoryDirectory {
    fn get_user(&self, user: UserId) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.get(&user).cloned())
    }

    fn list_other_users(&self, excluding: UserId) -> Result<Vec<User>, DirectoryError> {
        Ok(self
            .users
            .values()
            .filter(|user| user.user_id != excluding)
            .cloned()
            .collect())
    }

    fn collection_snapshot(
        &self,
        user: UserId,
        album: AlbumId,
    ) -> Result<CollectionSnapshot, DirectoryError> {
        let cards = self.cards_in_album(album);
        let records = self.records_for(user);
        Ok(CollectionSnapshot::derive(album, &cards, &records))
    }
}
