// Core algorithm exports
pub mod adjacency;
pub mod filters;
pub mod matcher;
pub mod rooms;
pub mod scoring;

pub use adjacency::Adjacency;
pub use filters::{matches_filter, matches_room_filter, validate_candidate, validate_filter};
pub use matcher::Matcher;
pub use rooms::search_rooms;
pub use scoring::{score, score_breakdown};
