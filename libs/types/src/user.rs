//! User records and their wire-safe public view
//!
//! The full `User` record belongs to the user directory and includes the
//! credential hash, so it intentionally does not implement `Serialize`.
//! The only user shape that crosses a wire is `PublicProfile`: id,
//! nickname and location, nothing else.

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user record as held by the user directory
///
/// Not serializable: anything leaving the process goes through
/// [`PublicProfile`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub nickname: String,
    pub password_hash: String,
    pub location: Option<String>,
    /// Unix nanoseconds
    pub created_at: i64,
}

impl User {
    /// Create a new user record
    pub fn new(
        nickname: impl Into<String>,
        password_hash: impl Into<String>,
        location: Option<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            nickname: nickname.into(),
            password_hash: password_hash.into(),
            location,
            created_at: timestamp,
        }
    }

    /// The wire-safe view of this user
    pub fn profile(&self) -> PublicProfile {
        PublicProfile {
            user_id: self.user_id,
            nickname: self.nickname.clone(),
            location: self.location.clone(),
        }
    }

    /// Creation time as a UTC datetime
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.created_at)
    }
}

/// Public user fields, safe to serialize into match results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    #[serde(rename = "id")]
    pub user_id: UserId,
    pub nickname: String,
    pub location: Option<String>,
}
