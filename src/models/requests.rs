use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::domain::{
    FilterCriteria, RoomFilter, RoomListing, RoomSortKey, RoommatePreferences, SortKey,
};

/// Request to score a single candidate
///
/// Candidate records stay raw until the handler decodes them, so a bad record
/// is reported by id instead of as a JSON syntax error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub preferences: RoommatePreferences,
    pub candidate: Value,
}

/// Request to filter and rank a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    pub preferences: RoommatePreferences,
    #[serde(default)]
    pub candidates: Vec<Value>,
    /// Omitted means no constraint
    #[serde(default)]
    pub filter: FilterCriteria,
    #[serde(default)]
    pub sort: SortKey,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request for the single best candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatchRequest {
    pub preferences: RoommatePreferences,
    #[serde(default)]
    pub candidates: Vec<Value>,
}

/// Request to search room listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomSearchRequest {
    #[serde(default)]
    pub rooms: Vec<RoomListing>,
    #[serde(default)]
    pub filter: RoomFilter,
    #[serde(default)]
    pub sort: RoomSortKey,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
