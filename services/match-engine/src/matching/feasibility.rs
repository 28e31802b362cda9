//! Feasible-trade counting between two collection snapshots
//!
//! A feasible trade for the pair (a, b) requires both directions to
//! benefit: the requestor wants `a` and the candidate holds it in surplus,
//! while the candidate wants `b` and the requestor holds `b` in surplus.
//!
//! The count is an existence count, not a maximum bipartite matching:
//! each card the candidate can supply contributes exactly once iff at
//! least one reciprocal gift exists, regardless of how many reciprocal
//! gifts there are. Two wanted cards backed by a single reciprocal
//! duplicate therefore count as two possible trades.

use types::collection::CollectionSnapshot;

/// Is there any card the candidate wants that the requestor can give away?
pub fn has_reciprocal_gift(requestor: &CollectionSnapshot, candidate: &CollectionSnapshot) -> bool {
    candidate
        .wanted
        .iter()
        .any(|card| requestor.has_duplicate(card))
}

/// Count feasible 1:1 trades from the requestor's point of view
///
/// One count per card in `requestor.wanted ∩ candidate.duplicates`,
/// provided at least one reciprocal gift exists; zero otherwise.
/// Feasibility is symmetric: this returns a positive count for (u, v)
/// exactly when it does for (v, u), though the two counts may differ.
pub fn count_feasible_trades(requestor: &CollectionSnapshot, candidate: &CollectionSnapshot) -> u32 {
    if !has_reciprocal_gift(requestor, candidate) {
        return 0;
    }

    requestor
        .wanted
        .iter()
        .filter(|card| candidate.has_duplicate(card))
        .count() as u32
}
