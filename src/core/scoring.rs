use crate::core::adjacency::{pets_fraction, strict_fraction, Adjacency};
use crate::models::{
    Attribute, AttributeScore, RoommatePreferences, RoommateProfile, ScoreBreakdown,
    ScoringWeights,
};

/// Calculate a compatibility score (0-100) for a candidate
///
/// Scoring formula:
/// score = round(sum over attributes of weight * match_fraction)
///
/// Categorical attributes earn partial credit through the adjacency tables,
/// pets earn partial credit on a mismatch, smoking and drinking earn none.
/// The result is clamped to 0..=100.
pub fn score(
    query: &RoommatePreferences,
    candidate: &RoommateProfile,
    weights: &ScoringWeights,
) -> u8 {
    let points: f64 = Attribute::ALL
        .iter()
        .map(|attribute| {
            weights.weight(*attribute) as f64 * match_fraction(*attribute, query, candidate)
        })
        .sum();

    to_score(points)
}

/// Same as [`score`], with one entry per attribute explaining the total
pub fn score_breakdown(
    query: &RoommatePreferences,
    candidate: &RoommateProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let attributes: Vec<AttributeScore> = Attribute::ALL
        .iter()
        .map(|attribute| {
            let weight = weights.weight(*attribute);
            let fraction = match_fraction(*attribute, query, candidate);
            AttributeScore {
                attribute: *attribute,
                weight,
                match_fraction: fraction,
                points: weight as f64 * fraction,
            }
        })
        .collect();

    let total = to_score(attributes.iter().map(|a| a.points).sum());

    ScoreBreakdown { total, attributes }
}

/// Match fraction (0.0 to 1.0) of one attribute pair
pub fn match_fraction(
    attribute: Attribute,
    query: &RoommatePreferences,
    candidate: &RoommateProfile,
) -> f64 {
    let habits = &candidate.habits;
    let prefs = &candidate.preferences;

    match attribute {
        Attribute::SleepSchedule => query.sleep_schedule.match_fraction(habits.sleep_schedule),
        Attribute::Cleanliness => query.cleanliness.match_fraction(habits.cleanliness),
        Attribute::Noise => query.noise.match_fraction(habits.noise),
        Attribute::Cooking => query.cooking.match_fraction(habits.cooking),
        Attribute::Social => query.social.match_fraction(habits.social),
        Attribute::StudyWork => query.study_work.match_fraction(habits.study_work),
        Attribute::Guests => query.guests.match_fraction(prefs.guests),
        Attribute::RoomType => query.room_type.match_fraction(prefs.room_type),
        Attribute::Pets => pets_fraction(query.pets, prefs.pets),
        Attribute::Smoking => strict_fraction(query.smoking, prefs.smoking),
        Attribute::Drinking => strict_fraction(query.drinking, prefs.drinking),
    }
}

/// Round half away from zero and clamp to the score range
#[inline]
fn to_score(points: f64) -> u8 {
    points.round().clamp(0.0, 100.0) as u8
}
