use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    decode_candidates, BestMatchRequest, BestMatchResponse, HealthResponse, RankMatchesRequest,
    RankMatchesResponse, RoommateProfile, ScoreRequest, ScoreResponse,
};
use crate::routes::{bad_request, engine_error_response, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_candidate))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/best", web::post().to(best_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one candidate with a per-attribute breakdown
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "preferences": RoommatePreferences,
///   "candidate": RoommateProfile
/// }
/// ```
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let candidate = match RoommateProfile::from_value(req.candidate) {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::warn!("Rejected score request: {}", e);
            return engine_error_response(&e);
        }
    };

    match state.matcher.rank_one(&req.preferences, candidate) {
        Ok(ranked) => {
            tracing::debug!("Scored candidate {}: {}", ranked.candidate_id, ranked.score);
            HttpResponse::Ok().json(ScoreResponse {
                candidate_id: ranked.candidate_id,
                score: ranked.score,
                breakdown: ranked.breakdown,
            })
        }
        Err(e) => {
            tracing::warn!("Rejected score request: {}", e);
            engine_error_response(&e)
        }
    }
}

/// Filter and rank a candidate pool
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": RoommatePreferences,
///   "candidates": [RoommateProfile],
///   "filter": { "ageRange": {"min": 18, "max": 50}, "gender": "Female",
///               "cleanliness": "neat", "sleepSchedule": "early", "social": "balanced",
///               "petFriendly": true, "nonSmoker": true, "location": "downtown" },
///   "sort": "compatibility|name_asc|name_desc|age_asc|age_desc",
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.candidates.len() > state.matching.max_pool_size {
        return bad_request(
            "Validation failed",
            format!(
                "at most {} candidates may be ranked per request",
                state.matching.max_pool_size
            ),
        );
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let req = req.into_inner();
    let total_candidates = req.candidates.len();
    let candidates = match decode_candidates(req.candidates) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("[{}] Rejected rank request: {}", request_id, e);
            return engine_error_response(&e);
        }
    };
    // Cap limit to keep responses bounded
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::debug!(
        "[{}] Ranking {} candidates, sort: {:?}, filtered: {}",
        request_id,
        total_candidates,
        req.sort,
        !req.filter.is_unconstrained()
    );

    let mut matches = match state.matcher.rank_and_filter(
        &req.preferences,
        candidates,
        &req.filter,
        req.sort,
    ) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("[{}] Rejected rank request: {}", request_id, e);
            return engine_error_response(&e);
        }
    };

    let total_results = matches.len();
    matches.truncate(limit);

    tracing::info!(
        "[{}] Returning {} matches (from {} candidates, {} passed filters)",
        request_id,
        matches.len(),
        total_candidates,
        total_results
    );

    HttpResponse::Ok().json(RankMatchesResponse {
        request_id,
        matches,
        total_candidates,
        total_results,
    })
}

/// Find the single best candidate
///
/// POST /api/v1/matches/best
///
/// Responds with `"match": null` when the pool is empty.
async fn best_match(
    state: web::Data<AppState>,
    req: web::Json<BestMatchRequest>,
) -> impl Responder {
    if req.candidates.len() > state.matching.max_pool_size {
        return bad_request(
            "Validation failed",
            format!(
                "at most {} candidates may be ranked per request",
                state.matching.max_pool_size
            ),
        );
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let req = req.into_inner();
    let candidates = match decode_candidates(req.candidates) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("[{}] Rejected best match request: {}", request_id, e);
            return engine_error_response(&e);
        }
    };

    match state.matcher.find_best(&req.preferences, candidates) {
        Ok(best_match) => {
            match &best_match {
                Some(best) => tracing::info!(
                    "[{}] Best match {} with score {}",
                    request_id,
                    best.candidate_id,
                    best.score
                ),
                None => tracing::info!("[{}] No candidates to match", request_id),
            }

            HttpResponse::Ok().json(BestMatchResponse {
                request_id,
                best_match,
            })
        }
        Err(e) => {
            tracing::warn!("[{}] Rejected best match request: {}", request_id, e);
            engine_error_response(&e)
        }
    }
}

