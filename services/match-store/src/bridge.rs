//! Bridge from engine output to persisted matches
//!
//! Acceptance freezes the compatibility score: the stored value is the
//! one the user saw when choosing the candidate, and it is never
//! recomputed, so it can drift from a freshly computed score once either
//! party's collection changes.

use types::errors::StoreError;
use types::ids::UserId;
use types::matches::{CandidateMatch, MatchRecord};

use crate::store::MatchStore;

/// Persist a chosen candidate as a pending match
///
/// `requestor` is the user who ran the match computation and picked
/// `candidate` from the ranked list. The new record starts `Pending`,
/// awaiting the candidate's response.
pub fn accept_candidate<S: MatchStore>(
    store: &mut S,
    requestor: UserId,
    candidate: &CandidateMatch,
    timestamp: i64,
) -> Result<MatchRecord, StoreError> {
    let record = MatchRecord::new(
        requestor,
        candidate.user.user_id,
        candidate.compatibility,
        timestamp,
    );
    store.insert(record.clone())?;

    tracing::info!(
        match_id = %record.match_id,
        requestor = %requestor,
        candidate = %candidate.user.user_id,
        compatibility = candidate.compatibility,
        "persisted pending match"
    );

    Ok(record)
}
