//! Match-Store Service
//!
//! Thin persistence bridge between the match engine's ephemeral output
//! and stored match records. The engine itself never persists anything;
//! when a user picks a candidate from the computed list, this crate turns
//! that choice into a `MatchRecord` carrying the compatibility score
//! frozen at acceptance time.
//!
//! The storage engine proper is an external collaborator; the
//! `InMemoryMatchStore` here is the reference implementation of the
//! `MatchStore` boundary.

pub mod bridge;
pub mod store;

pub use bridge::accept_candidate;
pub use store::{InMemoryMatchStore, MatchStore};
