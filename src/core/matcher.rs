use crate::core::{
    filters::{matches_filter, validate_candidate, validate_filter},
    scoring::score_breakdown,
};
use crate::error::EngineError;
use crate::models::{
    FilterCriteria, RankedCandidate, RoommatePreferences, RoommateProfile, ScoringWeights, SortKey,
};
use std::cmp::Ordering;

/// Compatibility engine - filters, scores and ranks roommate candidates
///
/// # Pipeline Stages
/// 1. Validation of each candidate as it is consumed
/// 2. Hard filter criteria
/// 3. Scoring against the query preferences
/// 4. Sorting with an id tie-break
///
/// The matcher holds only its weights, so it is cheap to clone and safe to
/// share between requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate, including the per-attribute breakdown
    pub fn rank_one(
        &self,
        query: &RoommatePreferences,
        candidate: RoommateProfile,
    ) -> Result<RankedCandidate, EngineError> {
        validate_candidate(&candidate)?;
        Ok(self.to_ranked(query, candidate))
    }

    /// Filter, score and sort a candidate pool
    ///
    /// The pool is consumed once, in order. Any malformed candidate fails the
    /// whole batch, whether or not it would have passed the filter.
    pub fn rank_and_filter<I>(
        &self,
        query: &RoommatePreferences,
        candidates: I,
        filter: &FilterCriteria,
        sort: SortKey,
    ) -> Result<Vec<RankedCandidate>, EngineError>
    where
        I: IntoIterator<Item = RoommateProfile>,
    {
        validate_filter(filter)?;

        let mut ranked = Vec::new();
        for candidate in candidates {
            validate_candidate(&candidate)?;
            if matches_filter(&candidate, filter) {
                ranked.push(self.to_ranked(query, candidate));
            }
        }

        ranked.sort_by(|a, b| compare(a, b, sort));

        tracing::debug!(
            results = ranked.len(),
            sort = ?sort,
            "Ranked roommate candidates"
        );

        Ok(ranked)
    }

    /// Highest-scoring candidate, or `None` for an empty pool
    pub fn find_best<I>(
        &self,
        query: &RoommatePreferences,
        candidates: I,
    ) -> Result<Option<RankedCandidate>, EngineError>
    where
        I: IntoIterator<Item = RoommateProfile>,
    {
        let mut best: Option<RankedCandidate> = None;

        for candidate in candidates {
            validate_candidate(&candidate)?;
            let ranked = self.to_ranked(query, candidate);
            let replace = match &best {
                Some(current) => {
                    compare(&ranked, current, SortKey::Compatibility) == Ordering::Less
                }
                None => true,
            };
            if replace {
                best = Some(ranked);
            }
        }

        Ok(best)
    }

    /// The first `limit` candidates of the unfiltered compatibility ranking
    pub fn top_matches<I>(
        &self,
        query: &RoommatePreferences,
        candidates: I,
        limit: usize,
    ) -> Result<Vec<RankedCandidate>, EngineError>
    where
        I: IntoIterator<Item = RoommateProfile>,
    {
        let mut ranked = self.rank_and_filter(
            query,
            candidates,
            &FilterCriteria::default(),
            SortKey::Compatibility,
        )?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    fn to_ranked(
        &self,
        query: &RoommatePreferences,
        mut candidate: RoommateProfile,
    ) -> RankedCandidate {
        let breakdown = score_breakdown(query, &candidate, &self.weights);
        candidate.compatibility = Some(breakdown.total);

        RankedCandidate {
            candidate_id: candidate.id.clone(),
            score: breakdown.total,
            candidate,
            breakdown,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Total order for a sort key; ties always fall back to ascending id
fn compare(a: &RankedCandidate, b: &RankedCandidate, sort: SortKey) -> Ordering {
    let primary = match sort {
        SortKey::Compatibility => b.score.cmp(&a.score),
        SortKey::NameAsc => a.candidate.name.cmp(&b.candidate.name),
        SortKey::NameDesc => b.candidate.name.cmp(&a.candidate.name),
        SortKey::AgeAsc => a.candidate.age.cmp(&b.candidate.age),
        SortKey::AgeDesc => b.candidate.age.cmp(&a.candidate.age),
    };

    primary.then_with(|| a.candidate_id.cmp(&b.candidate_id))
}
