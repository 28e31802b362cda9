//! Error taxonomy for the matching platform
//!
//! A directory failure is never folded into an empty result: "no matches
//! found" and "could not ask the directory" must stay distinguishable for
//! callers, so both collaborator error types propagate through the
//! top-level `MatchError`.

use crate::ids::MatchId;
use thiserror::Error;

/// Top-level error for match computation and persistence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Failures of the user-directory collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    /// The backing store did not answer (outage, timeout at the caller's
    /// boundary, connection refused)
    #[error("Directory unavailable: {message}")]
    Unavailable { message: String },

    /// The backing store answered but the query itself failed
    #[error("Directory query failed: {message}")]
    QueryFailed { message: String },
}

/// Failures of the match-store collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Match not found: {match_id}")]
    NotFound { match_id: MatchId },

    /// The match already reached a terminal status
    #[error("Match already resolved as {status}")]
    AlreadyResolved { status: String },

    /// The backing store did not answer
    #[error("Match store unavailable: {message}")]
    Unavailable { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_display() {
        let err = DirectoryError::Unavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Directory unavailable: connection refused");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::AlreadyResolved {
            status: "accepted".to_string(),
        };
        assert!(err.to_string().contains("accepted"));
    }

    #[test]
    fn test_match_error_from_directory_error() {
        let dir_err = DirectoryError::QueryFailed {
            message: "bad cursor".to_string(),
        };
        let match_err: MatchError = dir_err.into();
        assert!(matches!(match_err, MatchError::Directory(_)));
    }

    #[test]
    fn test_match_error_from_store_error() {
        let store_err = StoreError::Unavailable {
            message: "disk full".to_string(),
        };
        let match_err: MatchError = store_err.into();
        assert!(matches!(match_err, MatchError::Store(_)));
    }
}
