//! Matching logic module
//!
//! Feasibility counting and compatibility scoring for candidate pairs

pub mod feasibility;
pub mod scoring;

pub use feasibility::count_feasible_trades;
pub use scoring::{compatibility_score, rank_candidates};
