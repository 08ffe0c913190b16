use crate::error::EngineError;
use crate::models::{FilterCriteria, RoomFilter, RoomListing, RoommateProfile};

/// Youngest age a candidate may have
pub const MINIMUM_AGE: u8 = 18;

/// Check that a candidate record is well formed
///
/// Enum domains are already enforced by the types; what remains is identity
/// and the age floor.
pub fn validate_candidate(profile: &RoommateProfile) -> Result<(), EngineError> {
    if profile.id.trim().is_empty() {
        return Err(EngineError::invalid_candidate(&profile.id, "id must not be empty"));
    }

    if profile.age < MINIMUM_AGE {
        return Err(EngineError::invalid_candidate(
            &profile.id,
            format!("age {} is below {}", profile.age, MINIMUM_AGE),
        ));
    }

    Ok(())
}

/// Check that filter criteria are internally consistent
pub fn validate_filter(filter: &FilterCriteria) -> Result<(), EngineError> {
    if let Some(range) = filter.age_range {
        if range.min > range.max {
            return Err(EngineError::InvalidFilter(format!(
                "age range min {} exceeds max {}",
                range.min, range.max
            )));
        }
    }

    Ok(())
}

/// Check if a candidate satisfies every active filter criterion
#[inline]
pub fn matches_filter(profile: &RoommateProfile, filter: &FilterCriteria) -> bool {
    // Check age range
    if let Some(range) = filter.age_range {
        if !range.contains(profile.age) {
            return false;
        }
    }

    // Check gender
    if let Some(gender) = &filter.gender {
        if profile.gender != *gender {
            return false;
        }
    }

    // Check habit constraints
    if filter
        .cleanliness
        .is_some_and(|c| profile.habits.cleanliness != c)
    {
        return false;
    }

    if filter
        .sleep_schedule
        .is_some_and(|s| profile.habits.sleep_schedule != s)
    {
        return false;
    }

    if filter.social.is_some_and(|s| profile.habits.social != s) {
        return false;
    }

    // Check household toggles
    if filter.pet_friendly && !profile.preferences.pets {
        return false;
    }

    if filter.non_smoker && profile.preferences.smoking {
        return false;
    }

    // Check location
    if let Some(location) = &filter.location {
        if !contains_ignore_case(&profile.location, location) {
            return false;
        }
    }

    true
}

/// Check that a room filter is internally consistent
pub fn validate_room_filter(filter: &RoomFilter) -> Result<(), EngineError> {
    if let Some(range) = filter.price_range {
        if range.min > range.max {
            return Err(EngineError::InvalidFilter(format!(
                "price range min {} exceeds max {}",
                range.min, range.max
            )));
        }
    }

    Ok(())
}

/// Check if a room listing satisfies every active room filter criterion
#[inline]
pub fn matches_room_filter(room: &RoomListing, filter: &RoomFilter) -> bool {
    if let Some(range) = filter.price_range {
        if room.price < range.min || room.price > range.max {
            return false;
        }
    }

    if let Some(location) = &filter.location {
        if !contains_ignore_case(&room.location, location) {
            return false;
        }
    }

    if filter.bedrooms.is_some_and(|b| room.bedrooms != b) {
        return false;
    }

    filter
        .amenities
        .iter()
        .all(|amenity| room.amenities.contains(amenity))
}

#[inline]
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
