//! Roommate Match - compatibility scoring and ranking for roommate candidates
//!
//! This library provides the compatibility engine: it scores a candidate's
//! habits and household preferences against a user's survey answers, applies
//! hard filter criteria, and ranks the survivors deterministically.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{score, score_breakdown, search_rooms, Matcher};
pub use error::EngineError;
pub use models::{
    FilterCriteria, RankedCandidate, RoommatePreferences, RoommateProfile, ScoringWeights,
    SortKey,
};
