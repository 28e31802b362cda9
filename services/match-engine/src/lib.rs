//! Match-Engine Service
//!
//! Computes, for one requesting user, the ranked list of other users with
//! whom a mutually beneficial one-for-one card trade is possible.
//!
//! The engine is a pure, stateless transform over collection snapshots:
//! no caching, no clock, no mutation. Every invocation re-reads the
//! directory and recomputes from scratch, so it can be called concurrently
//! for different requestors without coordination.
//!
//! **Key invariants:**
//! - The requestor never appears in its own result
//! - Candidates with zero feasible trades are never emitted
//! - Emitted compatibility is always in 1..=100
//! - Output is ordered: compatibility descending, then ascending user id
//! - A directory failure propagates; it is never returned as "no matches"

pub mod directory;
pub mod engine;
pub mod matching;
pub mod memory;

pub use directory::Directory;
pub use engine::MatchEngine;
pub use memory::InMemoryDirectory;
