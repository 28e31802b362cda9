//! Candidate matches and persisted match records
//!
//! `CandidateMatch` is the compatibility engine's output: ephemeral,
//! recomputed on demand, ordering significant. `MatchRecord` is what the
//! persistence bridge writes once a candidate is accepted; it freezes the
//! compatibility value at acceptance time and is never recomputed, so a
//! stored score can drift from a freshly computed one as either party's
//! collection changes.

use crate::ids::{MatchId, UserId};
use crate::user::PublicProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ranked entry in a potential-match listing
///
/// Serialized shape: `{"user": {...}, "compatibility": n,
/// "possibleTrades": n}` with public user fields only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMatch {
    pub user: PublicProfile,
    /// Normalized score, 1..=100 for every emitted candidate
    pub compatibility: u8,
    /// Number of feasible 1:1 trades, always > 0 for emitted candidates
    pub possible_trades: u32,
}

/// Lifecycle of a persisted match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Created, awaiting the other party's response
    Pending,
    /// Both parties agreed (terminal)
    Accepted,
    /// One party declined (terminal)
    Declined,
}

impl MatchStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Accepted | MatchStatus::Declined)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Declined => "declined",
        };
        write!(f, "{}", s)
    }
}

/// A persisted match between two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: MatchId,
    /// The user who initiated the match (the requestor)
    pub user_a: UserId,
    /// The matched candidate
    pub user_b: UserId,
    /// Compatibility score frozen at acceptance time
    pub compatibility: u8,
    pub status: MatchStatus,
    /// Unix nanoseconds
    pub created_at: i64,
}

impl MatchRecord {
    /// Create a new pending match record
    pub fn new(user_a: UserId, user_b: UserId, compatibility: u8, timestamp: i64) -> Self {
        Self {
            match_id: MatchId::new(),
            user_a,
            user_b,
            compatibility,
            status: MatchStatus::Pending,
            created_at: timestamp,
        }
    }

    /// Is the given user one of the two parties?
    pub fn involves(&self, user: UserId) -> bool {
        self.user_a == user || self.user_b == user
    }

    /// Creation time as a UTC datetime
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const TS: i64 = 1708123456789000000;

    #[test]
    fn test_match_record_creation() {
        let a = UserId::new();
        let b = UserId::new();
        let record = MatchRecord::new(a, b, 85, TS);

        assert_eq!(record.status, MatchStatus::Pending);
        assert!(record.involves(a));
        assert!(record.involves(b));
        assert!(!record.involves(UserId::new()));
        assert_eq!(record.compatibility, 85);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!MatchStatus::Pending.is_terminal());
        assert!(MatchStatus::Accepted.is_terminal());
        assert!(MatchStatus::Declined.is_terminal());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MatchStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&MatchStatus::Accepted).unwrap(), "\"accepted\"");
        assert_eq!(serde_json::to_string(&MatchStatus::Declined).unwrap(), "\"declined\"");
    }

    #[test]
    fn test_candidate_match_wire_shape() {
        let candidate = CandidateMatch {
            user: PublicProfile {
                user_id: UserId::from_uuid(Uuid::from_u128(7)),
                nickname: "giulia".to_string(),
                location: Some("Torino".to_string()),
            },
            compatibility: 100,
            possible_trades: 2,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["compatibility"], 100);
        assert_eq!(json["possibleTrades"], 2);
        assert_eq!(json["user"]["nickname"], "giulia");
        assert!(json["user"].get("password").is_none());

        let back: CandidateMatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, candidate);
    }

    #[test]
    fn test_match_record_serialization() {
        let record = MatchRecord::new(UserId::new(), UserId::new(), 50, TS);
        let json = serde_json::to_string(&record).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
