//! Compatibility scoring and result ranking
//!
//! The score estimates how productive trading with a candidate would be:
//! feasible trades normalized by the larger of the two wanted-set sizes,
//! as a percentage. All arithmetic uses `Decimal`; the only rounding step
//! is explicit half-away-from-zero, so 12.5% becomes 13, never 12.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use types::matches::CandidateMatch;

/// Compute the 0–100 compatibility score
///
/// `round(min(100, possible_trades / max(requestor_wanted,
/// candidate_wanted, 1) * 100))`, with two guards: the `max(.., 1)` floor
/// keeps the division defined when both wanted sets are empty, and a
/// nonzero trade count never rounds down to a zero score: every emitted
/// candidate scores at least 1.
pub fn compatibility_score(
    possible_trades: u32,
    requestor_wanted: usize,
    candidate_wanted: usize,
) -> u8 {
    let denominator = requestor_wanted.max(candidate_wanted).max(1);

    let percentage = Decimal::from(possible_trades) * Decimal::ONE_HUNDRED
        / Decimal::from(denominator as u64);
    let clamped = percentage.min(Decimal::ONE_HUNDRED);
    let rounded = clamped
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0);

    if possible_trades > 0 {
        rounded.max(1)
    } else {
        rounded
    }
}

/// Sort candidates into the result ordering contract
///
/// Compatibility descending; ties broken by ascending candidate user id,
/// so repeated calls over unchanged state return the same sequence.
pub fn rank_candidates(candidates: &mut [CandidateMatch]) {
    candidates.sort_by(|a, b| {
        b.compatibility
            .cmp(&a.compatibility)
            .then_with(|| a.user.user_id.cmp(&b.user.user_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::UserId;
    use types::user::PublicProfile;
    use uuid::Uuid;

    fn candidate(id: u128, compatibility: u8, possible_trades: u32) -> CandidateMatch {
        CandidateMatch {
            user: PublicProfile {
                user_id: UserId::from_uuid(Uuid::from_u128(id)),
                nickname: format!("user-{id}"),
                location: None,
            },
            compatibility,
            possible_trades,
        }
    }

    #[test]
    fn test_full_score() {
        // 2 trades over max(2, 1) wanted = 100%
        assert_eq!(compatibility_score(2, 2, 1), 100);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1/8 = 12.5% -> 13
        assert_eq!(compatibility_score(1, 8, 3), 13);
        // 1/3 = 33.33% -> 33
        assert_eq!(compatibility_score(1, 3, 2), 33);
        // 2/3 = 66.66% -> 67
        assert_eq!(compatibility_score(2, 3, 1), 67);
    }

    #[test]
    fn test_score_clamped_at_100() {
        // More feasible trades than wanted cards (duplicate-only records
        // can inflate the numerator); the min() cap holds.
        assert_eq!(compatibility_score(5, 2, 1), 100);
    }

    #[test]
    fn test_zero_wanted_denominator_floor() {
        assert_eq!(compatibility_score(0, 0, 0), 0);
    }

    #[test]
    fn test_nonzero_trades_never_score_zero() {
        // 1/300 = 0.33% would round to 0; the floor keeps it at 1.
        assert_eq!(compatibility_score(1, 300, 10), 1);
    }

    #[test]
    fn test_ranking_orders_by_score_then_id() {
        let mut candidates = vec![
            candidate(3, 50, 1),
            candidate(1, 100, 2),
            candidate(2, 50, 3),
        ];
        rank_candidates(&mut candidates);

        let ids: Vec<u128> = candidates
            .iter()
            .map(|c| c.user.user_id.as_uuid().as_u128())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(candidates[0].compatibility, 100);
    }
}
