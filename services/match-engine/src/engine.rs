//! Match engine core
//!
//! Coordinates the directory collaborator and the matching logic into the
//! one public operation: `compute_potential_matches`.

use types::errors::MatchError;
use types::ids::{AlbumId, UserId};
use types::matches::CandidateMatch;

use crate::directory::Directory;
use crate::matching::{compatibility_score, count_feasible_trades, rank_candidates};

/// The trade-compatibility engine
///
/// Generic over the [`Directory`] implementation so tests run against an
/// in-memory fake and production wires in the real store. Holds no state
/// of its own; invocations are independent and side-effect free.
pub struct MatchEngine<D: Directory> {
    directory: D,
}

impl<D: Directory> MatchEngine<D> {
    /// Create an engine over the given directory
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Access the underlying directory (for embedding callers)
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Compute the ranked list of users the requestor could trade with
    ///
    /// For each other user in the directory, counts the feasible 1:1
    /// trades within `album` and scores the pair; candidates with no
    /// feasible trade are omitted entirely. The result is ordered by
    /// compatibility descending, ties by ascending user id.
    ///
    /// Two inputs short-circuit to an empty result without error: a
    /// requestor id the directory does not know, and a requestor with no
    /// possession records in the album. A failing directory call is a
    /// different matter: it aborts the computation and propagates, so
    /// callers can tell "no matches" from "could not look".
    pub fn compute_potential_matches(
        &self,
        requestor: UserId,
        album: AlbumId,
    ) -> Result<Vec<CandidateMatch>, MatchError> {
        if self.directory.get_user(requestor)?.is_none() {
            tracing::debug!(%requestor, "requestor not in directory, returning no matches");
            return Ok(Vec::new());
        }

        let mine = self.directory.collection_snapshot(requestor, album)?;
        if mine.is_empty() {
            tracing::debug!(%requestor, %album, "requestor has no possession records in album");
            return Ok(Vec::new());
        }

        let mut candidates = Vec::new();
        for other in self.directory.list_other_users(requestor)? {
            let theirs = self.directory.collection_snapshot(other.user_id, album)?;

            let possible_trades = count_feasible_trades(&mine, &theirs);
            if possible_trades == 0 {
                continue;
            }

            let compatibility =
                compatibility_score(possible_trades, mine.wanted.len(), theirs.wanted.len());

            candidates.push(CandidateMatch {
                user: other.profile(),
                compatibility,
                possible_trades,
            });
        }

        rank_candidates(&mut candidates);

        tracing::debug!(
            %requestor,
            %album,
            candidates = candidates.len(),
            "computed potential matches"
        );

        Ok(candidates)
    }
}
