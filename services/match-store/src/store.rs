//! Match record storage boundary
//!
//! `MatchStore` is the capability the platform's storage layer implements;
//! `InMemoryMatchStore` is the reference backing used by tests and
//! store-less embeddings. Records are keyed by `MatchId` in a `BTreeMap`,
//! and since match ids are UUID v7, plain key order is creation order.

use std::collections::BTreeMap;

use types::errors::StoreError;
use types::ids::{MatchId, UserId};
use types::matches::{MatchRecord, MatchStatus};

/// Persistence capability for match records
pub trait MatchStore {
    /// Persist a new match record
    fn insert(&mut self, record: MatchRecord) -> Result<(), StoreError>;

    /// Fetch a single match record
    fn get(&self, id: MatchId) -> Result<Option<MatchRecord>, StoreError>;

    /// All matches the given user is a party to, in creation order
    fn matches_for_user(&self, user: UserId) -> Result<Vec<MatchRecord>, StoreError>;

    /// Move a match to a new status
    ///
    /// Transitions out of a terminal status are refused with
    /// [`StoreError::AlreadyResolved`].
    fn update_status(&mut self, id: MatchId, status: MatchStatus)
        -> Result<MatchRecord, StoreError>;
}

/// In-memory match store
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    records: BTreeMap<MatchId, MatchRecord>,
}

impl InMemoryMatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn insert(&mut self, record: MatchRecord) -> Result<(), StoreError> {
        self.records.insert(record.match_id, record);
        Ok(())
    }

    fn get(&self, id: MatchId) -> Result<Option<MatchRecord>, StoreError> {
        Ok(self.records.get(&id).cloned())
    }

    fn matches_for_user(&self, user: UserId) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self
            .records
            .values()
            .filter(|record| record.involves(user))
            .cloned()
            .collect())
    }

    fn update_status(
        &mut self,
        id: MatchId,
        status: MatchStatus,
    ) -> Result<MatchRecord, StoreError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound { match_id: id })?;

        if record.status.is_terminal() {
            return Err(StoreError::AlreadyResolved {
                status: record.status.to_string(),
            });
        }

        record.status = status;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i64 = 1708123456789000000;

    #[test]
    fn test_insert_and_get() {
        let mut store = InMemoryMatchStore::new();
        let record = MatchRecord::new(UserId::new(), UserId::new(), 85, TS);
        let id = record.match_id;

        store.insert(record.clone()).unwrap();
        assert_eq!(store.get(id).unwrap(), Some(record));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = InMemoryMatchStore::new();
        assert_eq!(store.get(MatchId::new()).unwrap(), None);
    }

    #[test]
    fn test_matches_for_user_filters_parties() {
        let mut store = InMemoryMatchStore::new();
        let a = UserId::new();
        let b = UserId::new();
        let c = UserId::new();

        store.insert(MatchRecord::new(a, b, 70, TS)).unwrap();
        store.insert(MatchRecord::new(b, c, 40, TS)).unwrap();

        assert_eq!(store.matches_for_user(a).unwrap().len(), 1);
        assert_eq!(store.matches_for_user(b).unwrap().len(), 2);
        assert_eq!(store.matches_for_user(c).unwrap().len(), 1);
        assert!(store.matches_for_user(UserId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_matches_come_back_in_creation_order() {
        let mut store = InMemoryMatchStore::new();
        let user = UserId::new();

        let first = MatchRecord::new(user, UserId::new(), 10, TS);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = MatchRecord::new(user, UserId::new(), 20, TS + 1);

        // Insert out of order; v7 key order restores chronology.
        store.insert(second.clone()).unwrap();
        store.insert(first.clone()).unwrap();

        let listed = store.matches_for_user(user).unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_status_transition() {
        let mut store = InMemoryMatchStore::new();
        let record = MatchRecord::new(UserId::new(), UserId::new(), 60, TS);
        let id = record.match_id;
        store.insert(record).unwrap();

        let updated = store.update_status(id, MatchStatus::Accepted).unwrap();
        assert_eq!(updated.status, MatchStatus::Accepted);
        assert_eq!(store.get(id).unwrap().unwrap().status, MatchStatus::Accepted);
    }

    #[test]
    fn test_terminal_status_is_frozen() {
        let mut store = InMemoryMatchStore::new();
        let record = MatchRecord::new(UserId::new(), UserId::new(), 60, TS);
        let id = record.match_id;
        store.insert(record).unwrap();
        store.update_status(id, MatchStatus::Declined).unwrap();

        let result = store.update_status(id, MatchStatus::Accepted);
        assert_eq!(
            result,
            Err(StoreError::AlreadyResolved {
                status: "declined".to_string()
            })
        );
    }

    #[test]
    fn test_update_missing_record() {
        let mut store = InMemoryMatchStore::new();
        let id = MatchId::new();
        let result = store.update_status(id, MatchStatus::Accepted);
        assert_eq!(result, Err(StoreError::NotFound { match_id: id }));
    }

    #[test]
    fn test_listing_serializes_for_transport() {
        let mut store = InMemoryMatchStore::new();
        let user = UserId::new();
        store.insert(MatchRecord::new(user, UserId::new(), 85, TS)).unwrap();

        let listed = store.matches_for_user(user).unwrap();
        let json = serde_json::to_value(&listed).unwrap();

        assert_eq!(json[0]["compatibility"], 85);
        assert_eq!(json[0]["status"], "pending");
        assert!(json[0].get("matchId").is_some());
        assert!(json[0].get("userA").is_some());
        assert!(json[0].get("userB").is_some());
    }
}
