use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed lifestyle category with its wire names.
///
/// Parsing is case-insensitive and rejects anything outside the listed values.
macro_rules! lifestyle_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $attribute:tt {
            $($variant:ident => $wire:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(EngineError::InvalidValue {
                        attribute: $attribute,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

lifestyle_enum! {
    /// When a person usually goes to bed
    SleepSchedule, "sleepSchedule" {
        Early => "early",
        Normal => "normal",
        Late => "late",
    }
}

lifestyle_enum! {
    Cleanliness, "cleanliness" {
        Neat => "neat",
        Moderate => "moderate",
        Messy => "messy",
    }
}

lifestyle_enum! {
    Noise, "noise" {
        Quiet => "quiet",
        Moderate => "moderate",
        Loud => "loud",
    }
}

lifestyle_enum! {
    /// How often the shared kitchen gets used
    Cooking, "cooking" {
        Frequent => "frequent",
        Occasional => "occasional",
        Never => "none",
    }
}

lifestyle_enum! {
    Social, "social" {
        Introvert => "introvert",
        Balanced => "balanced",
        Extrovert => "extrovert",
    }
}

lifestyle_enum! {
    /// Study or work style at home
    StudyWork, "studyWork" {
        Focused => "focused",
        Relaxed => "relaxed",
        Flexible => "flexible",
    }
}

lifestyle_enum! {
    /// How often guests come over
    Guests, "guests" {
        Rarely => "rarely",
        Occasionally => "occasionally",
        Frequently => "frequently",
    }
}

lifestyle_enum! {
    RoomType, "roomType" {
        Private => "private",
        Shared => "shared",
    }
}

/// Lifestyle survey answers of the requesting user
///
/// Always fully populated. Until the survey is completed the defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoommatePreferences {
    #[serde(rename = "sleepSchedule")]
    pub sleep_schedule: SleepSchedule,
    pub cleanliness: Cleanliness,
    pub noise: Noise,
    pub cooking: Cooking,
    pub social: Social,
    #[serde(rename = "studyWork")]
    pub study_work: StudyWork,
    pub pets: bool,
    pub smoking: bool,
    pub drinking: bool,
    pub guests: Guests,
    #[serde(rename = "roomType")]
    pub room_type: RoomType,
}

impl Default for RoommatePreferences {
    fn default() -> Self {
        Self {
            sleep_schedule: SleepSchedule::Normal,
            cleanliness: Cleanliness::Moderate,
            noise: Noise::Moderate,
            cooking: Cooking::Occasional,
            social: Social::Balanced,
            study_work: StudyWork::Flexible,
            pets: false,
            smoking: false,
            drinking: false,
            guests: Guests::Occasionally,
            room_type: RoomType::Private,
        }
    }
}

impl RoommatePreferences {
    /// Split into the candidate-side shape, e.g. to publish a user's own answers
    pub fn split(&self) -> (Habits, LifestylePreferences) {
        (
            Habits {
                sleep_schedule: self.sleep_schedule,
                cleanliness: self.cleanliness,
                noise: self.noise,
                cooking: self.cooking,
                social: self.social,
                study_work: self.study_work,
            },
            LifestylePreferences {
                pets: self.pets,
                smoking: self.smoking,
                drinking: self.drinking,
                guests: self.guests,
                room_type: self.room_type,
            },
        )
    }
}

/// Day-to-day habits of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habits {
    #[serde(rename = "sleepSchedule")]
    pub sleep_schedule: SleepSchedule,
    pub cleanliness: Cleanliness,
    pub noise: Noise,
    pub cooking: Cooking,
    pub social: Social,
    #[serde(rename = "studyWork")]
    pub study_work: StudyWork,
}

/// Household rules a candidate is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestylePreferences {
    pub pets: bool,
    pub smoking: bool,
    pub drinking: bool,
    pub guests: Guests,
    #[serde(rename = "roomType")]
    pub room_type: RoomType,
}

/// A prospective roommate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoommateProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub location: String,
    pub habits: Habits,
    pub preferences: LifestylePreferences,
    /// Derived by the engine on every request; any incoming value is ignored.
    #[serde(default)]
    pub compatibility: Option<u8>,
    #[serde(default)]
    pub bio: String,
}

impl RoommateProfile {
    /// The candidate's answers viewed as a preference set
    pub fn as_preferences(&self) -> RoommatePreferences {
        RoommatePreferences {
            sleep_schedule: self.habits.sleep_schedule,
            cleanliness: self.habits.cleanliness,
            noise: self.habits.noise,
            cooking: self.habits.cooking,
            social: self.habits.social,
            study_work: self.habits.study_work,
            pets: self.preferences.pets,
            smoking: self.preferences.smoking,
            drinking: self.preferences.drinking,
            guests: self.preferences.guests,
            room_type: self.preferences.room_type,
        }
    }

    /// Decode one raw candidate record
    ///
    /// Shape and enum failures are reported against the record's `id` so a
    /// bad entry in a pool can be traced back to its source.
    pub fn from_value(value: serde_json::Value) -> Result<Self, EngineError> {
        let id = value
            .get("id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<missing id>")
            .to_string();

        serde_json::from_value(value)
            .map_err(|e| EngineError::invalid_candidate(&id, e.to_string()))
    }
}

/// Decode a pool of raw candidate records, stopping at the first bad one
pub fn decode_candidates(
    values: Vec<serde_json::Value>,
) -> Result<Vec<RoommateProfile>, EngineError> {
    values.into_iter().map(RoommateProfile::from_value).collect()
}

/// Inclusive age bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    #[inline]
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Hard constraints applied before scoring
///
/// `None` and `false` mean "no constraint". Active criteria are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub cleanliness: Option<Cleanliness>,
    #[serde(rename = "sleepSchedule", default)]
    pub sleep_schedule: Option<SleepSchedule>,
    #[serde(default)]
    pub social: Option<Social>,
    #[serde(rename = "petFriendly", default)]
    pub pet_friendly: bool,
    #[serde(rename = "nonSmoker", default)]
    pub non_smoker: bool,
    /// Case-insensitive substring of the candidate's location
    #[serde(default)]
    pub location: Option<String>,
}

impl FilterCriteria {
    /// Reset state of the roommate filter form
    pub fn form_defaults() -> Self {
        Self {
            age_range: Some(AgeRange { min: 18, max: 50 }),
            ..Self::default()
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Ordering of ranked candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Compatibility,
    NameAsc,
    NameDesc,
    AgeAsc,
    AgeDesc,
}

/// Scored attribute pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    SleepSchedule,
    Cleanliness,
    Noise,
    Cooking,
    Social,
    StudyWork,
    Guests,
    RoomType,
    Pets,
    Smoking,
    Drinking,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Attribute::SleepSchedule,
        Attribute::Cleanliness,
        Attribute::Noise,
        Attribute::Cooking,
        Attribute::Social,
        Attribute::StudyWork,
        Attribute::Guests,
        Attribute::RoomType,
        Attribute::Pets,
        Attribute::Smoking,
        Attribute::Drinking,
    ];
}

/// Scoring weights, one per attribute, summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub sleep_schedule: u32,
    pub cleanliness: u32,
    pub noise: u32,
    pub cooking: u32,
    pub social: u32,
    pub study_work: u32,
    pub guests: u32,
    pub room_type: u32,
    pub pets: u32,
    pub smoking: u32,
    pub drinking: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sleep_schedule: 12,
            cleanliness: 15,
            noise: 10,
            cooking: 8,
            social: 10,
            study_work: 10,
            guests: 8,
            room_type: 7,
            pets: 8,
            smoking: 7,
            drinking: 5,
        }
    }
}

impl ScoringWeights {
    pub fn weight(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::SleepSchedule => self.sleep_schedule,
            Attribute::Cleanliness => self.cleanliness,
            Attribute::Noise => self.noise,
            Attribute::Cooking => self.cooking,
            Attribute::Social => self.social,
            Attribute::StudyWork => self.study_work,
            Attribute::Guests => self.guests,
            Attribute::RoomType => self.room_type,
            Attribute::Pets => self.pets,
            Attribute::Smoking => self.smoking,
            Attribute::Drinking => self.drinking,
        }
    }

    pub fn total(&self) -> u32 {
        Attribute::ALL.iter().map(|a| self.weight(*a)).sum()
    }
}

/// Contribution of a single attribute to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeScore {
    pub attribute: Attribute,
    pub weight: u32,
    #[serde(rename = "matchFraction")]
    pub match_fraction: f64,
    pub points: f64,
}

/// Per-attribute explanation of a compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u8,
    pub attributes: Vec<AttributeScore>,
}

/// A candidate with its freshly computed score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub score: u8,
    pub candidate: RoommateProfile,
    pub breakdown: ScoreBreakdown,
}

/// Lister of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOwner {
    pub id: String,
    pub name: String,
}

/// A room offered for rent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Monthly rent in whole currency units
    pub price: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "availableFrom")]
    pub available_from: chrono::NaiveDate,
    #[serde(rename = "postedBy")]
    pub posted_by: ListingOwner,
}

/// Inclusive monthly rent bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Constraints for the room search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    /// Every listed amenity must be offered
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    AvailableSoonest,
}
