use crate::models::{
    Cleanliness, Cooking, Guests, Noise, RoomType, SleepSchedule, Social, StudyWork,
};

/// Credit for an exact match
pub const EXACT: f64 = 1.0;

/// Credit for a neighbouring value in an adjacency table
pub const ADJACENT: f64 = 0.5;

/// Credit when the pets answers differ
///
/// Pets are a softer constraint than smoking or drinking, which get nothing
/// on a mismatch.
pub const PETS_MISMATCH: f64 = 0.5;

/// Match fraction (0.0 to 1.0) between two values of a categorical attribute.
///
/// Every table is symmetric and enumerates each pair explicitly.
pub trait Adjacency: Copy + Eq {
    fn match_fraction(self, other: Self) -> f64;
}

impl Adjacency for SleepSchedule {
    fn match_fraction(self, other: Self) -> f64 {
        use SleepSchedule::*;
        match (self, other) {
            (Early, Early) | (Normal, Normal) | (Late, Late) => EXACT,
            (Early, Normal) | (Normal, Early) => ADJACENT,
            (Normal, Late) | (Late, Normal) => ADJACENT,
            (Early, Late) | (Late, Early) => 0.0,
        }
    }
}

impl Adjacency for Cleanliness {
    fn match_fraction(self, other: Self) -> f64 {
        use Cleanliness::*;
        match (self, other) {
            (Neat, Neat) | (Moderate, Moderate) | (Messy, Messy) => EXACT,
            (Neat, Moderate) | (Moderate, Neat) => ADJACENT,
            (Moderate, Messy) | (Messy, Moderate) => ADJACENT,
            (Neat, Messy) | (Messy, Neat) => 0.0,
        }
    }
}

impl Adjacency for Noise {
    fn match_fraction(self, other: Self) -> f64 {
        use Noise::*;
        match (self, other) {
            (Quiet, Quiet) | (Moderate, Moderate) | (Loud, Loud) => EXACT,
            (Quiet, Moderate) | (Moderate, Quiet) => ADJACENT,
            (Moderate, Loud) | (Loud, Moderate) => ADJACENT,
            (Quiet, Loud) | (Loud, Quiet) => 0.0,
        }
    }
}

impl Adjacency for Cooking {
    fn match_fraction(self, other: Self) -> f64 {
        use Cooking::*;
        match (self, other) {
            (Frequent, Frequent) | (Occasional, Occasional) | (Never, Never) => EXACT,
            (Frequent, Occasional) | (Occasional, Frequent) => ADJACENT,
            (Occasional, Never) | (Never, Occasional) => ADJACENT,
            (Frequent, Never) | (Never, Frequent) => 0.0,
        }
    }
}

impl Adjacency for Social {
    fn match_fraction(self, other: Self) -> f64 {
        use Social::*;
        match (self, other) {
            (Introvert, Introvert) | (Balanced, Balanced) | (Extrovert, Extrovert) => EXACT,
            (Introvert, Balanced) | (Balanced, Introvert) => ADJACENT,
            (Balanced, Extrovert) | (Extrovert, Balanced) => ADJACENT,
            (Introvert, Extrovert) | (Extrovert, Introvert) => 0.0,
        }
    }
}

impl Adjacency for StudyWork {
    fn match_fraction(self, other: Self) -> f64 {
        use StudyWork::*;
        // Flexible sits between the two ends.
        match (self, other) {
            (Focused, Focused) | (Relaxed, Relaxed) | (Flexible, Flexible) => EXACT,
            (Flexible, Focused) | (Focused, Flexible) => ADJACENT,
            (Flexible, Relaxed) | (Relaxed, Flexible) => ADJACENT,
            (Focused, Relaxed) | (Relaxed, Focused) => 0.0,
        }
    }
}

impl Adjacency for Guests {
    fn match_fraction(self, other: Self) -> f64 {
        use Guests::*;
        match (self, other) {
            (Rarely, Rarely) | (Occasionally, Occasionally) | (Frequently, Frequently) => EXACT,
            (Rarely, Occasionally) | (Occasionally, Rarely) => ADJACENT,
            (Occasionally, Frequently) | (Frequently, Occasionally) => ADJACENT,
            (Rarely, Frequently) | (Frequently, Rarely) => 0.0,
        }
    }
}

impl Adjacency for RoomType {
    fn match_fraction(self, other: Self) -> f64 {
        use RoomType::*;
        match (self, other) {
            (Private, Private) | (Shared, Shared) => EXACT,
            (Private, Shared) | (Shared, Private) => 0.0,
        }
    }
}

/// Match fraction for the pets answer
#[inline]
pub fn pets_fraction(query: bool, candidate: bool) -> f64 {
    if query == candidate {
        EXACT
    } else {
        PETS_MISMATCH
    }
}

/// Match fraction for smoking or drinking; no partial credit
#[inline]
pub fn strict_fraction(query: bool, candidate: bool) -> f64 {
    if query == candidate {
        EXACT
    } else {
        0.0
    }
}
