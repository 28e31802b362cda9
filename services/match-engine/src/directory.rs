//! Directory capability: the engine's only collaborator boundary
//!
//! The directory is backed by whatever user/collection store the embedding
//! application runs. The engine takes it by value (dependency injection)
//! so tests run against [`crate::memory::InMemoryDirectory`] and
//! production wires in a database-backed implementation.

use types::collection::CollectionSnapshot;
use types::errors::DirectoryError;
use types::ids::{AlbumId, UserId};
use types::user::User;

/// Read access to the user registry and per-user collection state
///
/// Every method is a point-in-time read. Two snapshots fetched moments
/// apart may reflect different wall-clock states; the engine does not
/// require cross-user read consistency. Implementations doing real I/O
/// should enforce their own timeouts; the engine never retries and has
/// no responsiveness bounds of its own.
pub trait Directory {
    /// Look up a single user record
    fn get_user(&self, user: UserId) -> Result<Option<User>, DirectoryError>;

    /// Enumerate every user except the given one
    ///
    /// Implementations must return a deterministic order for identical
    /// underlying state; the engine's idempotence guarantee builds on it.
    fn list_other_users(&self, excluding: UserId) -> Result<Vec<User>, DirectoryError>;

    /// Fetch one user's collection snapshot, restricted to one album
    ///
    /// A user with no possession records yields an empty snapshot, not an
    /// error; so does an album the directory has never heard of.
    fn collection_snapshot(&self, user: UserId, album: AlbumId)
        -> Result<CollectionSnapshot, DirectoryError>;
}
