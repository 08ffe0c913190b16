// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    decode_candidates, AgeRange, Attribute, AttributeScore, Cleanliness, Cooking, FilterCriteria,
    Guests, Habits, LifestylePreferences, ListingOwner, Noise, PriceRange, RankedCandidate,
    RoomFilter, RoomListing, RoomSortKey, RoomType, RoommatePreferences, RoommateProfile,
    ScoreBreakdown, ScoringWeights, SleepSchedule, Social, SortKey, StudyWork,
};
pub use requests::{BestMatchRequest, RankMatchesRequest, RoomSearchRequest, ScoreRequest};
pub use responses::{
    BestMatchResponse, ErrorResponse, HealthResponse, RankMatchesResponse, RoomSearchResponse,
    ScoreResponse,
};
