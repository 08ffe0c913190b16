use serde::{Deserialize, Serialize};
use crate::models::domain::{
    Attribute, AttributeScore, RankedCandidate, RoomListing, ScoreBreakdown,
};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResponse {
    /// Contribution of one attribute, if present in the breakdown
    pub fn attribute(&self, attribute: Attribute) -> Option<&AttributeScore> {
        self.breakdown.attributes.iter().find(|a| a.attribute == attribute)
    }
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub matches: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the best match endpoint; `match` is null for an empty pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatchResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "match")]
    pub best_match: Option<RankedCandidate>,
}

/// Response for the room search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSearchResponse {
    pub rooms: Vec<RoomListing>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
