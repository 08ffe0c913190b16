use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::search_rooms;
use crate::models::{RoomSearchRequest, RoomSearchResponse};
use crate::routes::{bad_request, engine_error_response, AppState};

/// Configure room listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms/search", web::post().to(search));
}

/// Search room listings
///
/// POST /api/v1/rooms/search
///
/// Request body:
/// ```json
/// {
///   "rooms": [RoomListing],
///   "filter": { "priceRange": {"min": 500, "max": 1500}, "location": "district",
///               "bedrooms": 1, "amenities": ["Wi-Fi"] },
///   "sort": "price_asc|price_desc|available_soonest",
///   "limit": 20
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<RoomSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for room search request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if req.rooms.len() > state.matching.max_pool_size {
        return bad_request(
            "Validation failed",
            format!(
                "at most {} rooms may be searched per request",
                state.matching.max_pool_size
            ),
        );
    }

    let req = req.into_inner();
    let total = req.rooms.len();
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    match search_rooms(req.rooms, &req.filter, req.sort) {
        Ok(mut rooms) => {
            let total_results = rooms.len();
            rooms.truncate(limit);

            tracing::info!(
                "Returning {} rooms (from {} listings, {} matching)",
                rooms.len(),
                total,
                total_results
            );

            HttpResponse::Ok().json(RoomSearchResponse {
                rooms,
                total_results,
            })
        }
        Err(e) => {
            tracing::warn!("Rejected room search: {}", e);
            engine_error_response(&e)
        }
    }
}
