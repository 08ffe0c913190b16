// HTTP tests for Roommate Match

use actix_web::{test, web, App};
use roommate_match::config::MatchingSettings;
use roommate_match::core::Matcher;
use roommate_match::models::{
    Attribute, BestMatchResponse, ErrorResponse, RankMatchesResponse, RoomSearchResponse,
    ScoreResponse,
};
use roommate_match::routes::{self, AppState};
use serde_json::{json, Value};

fn app_state() -> AppState {
    AppState {
        matcher: Matcher::with_default_weights(),
        matching: MatchingSettings {
            default_limit: 20,
            max_limit: 2,
            max_pool_size: 3,
        },
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn preferences() -> Value {
    json!({
        "sleepSchedule": "normal",
        "cleanliness": "neat",
        "noise": "quiet",
        "cooking": "occasional",
        "social": "balanced",
        "studyWork": "focused",
        "pets": false,
        "smoking": false,
        "drinking": true,
        "guests": "occasionally",
        "roomType": "private"
    })
}

fn candidate(id: &str, name: &str, age: u8, smoking: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "age": age,
        "gender": "Male",
        "location": "Downtown, City Center",
        "compatibility": 12,
        "habits": {
            "sleepSchedule": "normal",
            "cleanliness": "neat",
            "noise": "quiet",
            "cooking": "occasional",
            "social": "balanced",
            "studyWork": "focused"
        },
        "preferences": {
            "pets": false,
            "smoking": smoking,
            "drinking": true,
            "guests": "occasionally",
            "roomType": "private"
        }
    })
}

fn room(id: &str, price: u32, available_from: &str) -> Value {
    json!({
        "id": id,
        "title": "Sunny Private Room in Shared Apartment",
        "location": "Downtown, City Center",
        "price": price,
        "bedrooms": 1,
        "bathrooms": 1,
        "amenities": ["Wi-Fi", "Parking"],
        "availableFrom": available_from,
        "postedBy": { "id": "1", "name": "Alex Johnson" }
    })
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_score_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "preferences": preferences(),
            "candidate": candidate("1", "Alex Johnson", 24, true)
        }))
        .to_request();

    let body: ScoreResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.candidate_id, "1");
    assert_eq!(body.score, 93);
    assert_eq!(body.attribute(Attribute::Smoking).unwrap().points, 0.0);
}

#[actix_web::test]
async fn test_rank_endpoint_filters_sorts_and_limits() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [
                candidate("c", "Casey", 30, false),
                candidate("a", "Avery", 22, true),
                candidate("b", "Blake", 26, false)
            ],
            "filter": { "nonSmoker": true },
            "limit": 5
        }))
        .to_request();

    let body: RankMatchesResponse = test::call_and_read_body_json(&app, req).await;

    // The smoker is filtered out; both survivors fit under the limit
    assert_eq!(body.total_candidates, 3);
    assert_eq!(body.total_results, 2);
    let ids: Vec<&str> = body.matches.iter().map(|m| m.candidate_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert!(body.matches.iter().all(|m| m.candidate.compatibility == Some(100)));
}

#[actix_web::test]
async fn test_rank_limit_is_capped_at_max_limit() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [
                candidate("c", "Casey", 30, false),
                candidate("a", "Avery", 22, false),
                candidate("b", "Blake", 26, false)
            ],
            "limit": 5
        }))
        .to_request();

    let body: RankMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.matches.len(), 2);
    assert_eq!(body.total_candidates, 3);
    assert_eq!(body.total_results, 3);
    let ids: Vec<&str> = body.matches.iter().map(|m| m.candidate_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[actix_web::test]
async fn test_rank_default_limit_is_capped_at_max_limit() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [
                candidate("c", "Casey", 30, false),
                candidate("a", "Avery", 22, true),
                candidate("b", "Blake", 26, false)
            ]
        }))
        .to_request();

    let body: RankMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.matches.len(), 2);
    assert_eq!(body.total_results, 3);
}

#[actix_web::test]
async fn test_rank_endpoint_sort_by_age() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [
                candidate("c", "Casey", 30, false),
                candidate("a", "Avery", 22, true)
            ],
            "sort": "age_desc"
        }))
        .to_request();

    let body: RankMatchesResponse = test::call_and_read_body_json(&app, req).await;

    let ages: Vec<u8> = body.matches.iter().map(|m| m.candidate.age).collect();
    assert_eq!(ages, vec![30, 22]);
}

#[actix_web::test]
async fn test_rank_rejects_unknown_enum_value() {
    let app = init_app!();
    let mut prefs = preferences();
    prefs["sleepSchedule"] = json!("whenever");
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "preferences": prefs, "candidates": [] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_rank_names_candidate_with_unknown_enum_value() {
    let app = init_app!();
    let mut bad = candidate("cand-xyz", "Xyz", 25, false);
    bad["habits"]["cleanliness"] = json!("spotless");
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [candidate("ok", "Okay", 25, false), bad]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_candidate");
    assert!(body.message.contains("cand-xyz"), "message was {}", body.message);
    assert!(body.message.contains("spotless"));
}

#[actix_web::test]
async fn test_score_and_best_name_malformed_candidate() {
    let app = init_app!();
    let mut bad = candidate("cand-xyz", "Xyz", 25, false);
    bad["preferences"]["roomType"] = json!("penthouse");

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "preferences": preferences(), "candidate": bad.clone() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_candidate");
    assert!(body.message.contains("cand-xyz"));

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/best")
        .set_json(json!({ "preferences": preferences(), "candidates": [bad] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_candidate");
    assert!(body.message.contains("cand-xyz"));
}

#[actix_web::test]
async fn test_rank_rejects_underage_candidate() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [candidate("kid", "Kid", 16, false)]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_candidate");
    assert!(body.message.contains("kid"));
}

#[actix_web::test]
async fn test_rank_rejects_inverted_age_range() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [],
            "filter": { "ageRange": { "min": 40, "max": 20 } }
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_filter");
}

#[actix_web::test]
async fn test_rank_rejects_zero_limit() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "preferences": preferences(), "candidates": [], "limit": 0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_rank_rejects_oversized_pool() {
    let app = init_app!();
    let candidates: Vec<Value> = (0..4)
        .map(|i| candidate(&i.to_string(), "Many", 25, false))
        .collect();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "preferences": preferences(), "candidates": candidates }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_best_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/best")
        .set_json(json!({
            "preferences": preferences(),
            "candidates": [
                candidate("2", "Second", 25, false),
                candidate("1", "First", 25, false)
            ]
        }))
        .to_request();

    let body: BestMatchResponse = test::call_and_read_body_json(&app, req).await;
    let best = body.best_match.unwrap();
    assert_eq!(best.candidate_id, "1");
    assert_eq!(best.score, 100);
}

#[actix_web::test]
async fn test_best_endpoint_empty_pool() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/best")
        .set_json(json!({ "preferences": preferences(), "candidates": [] }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["match"].is_null());
}

#[actix_web::test]
async fn test_room_search_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/rooms/search")
        .set_json(json!({
            "rooms": [
                room("r2", 1200, "2025-04-15"),
                room("r1", 850, "2025-05-01"),
                room("r3", 900, "2025-05-15")
            ],
            "filter": { "priceRange": { "min": 0, "max": 1000 }, "amenities": ["Wi-Fi"] },
            "sort": "price_desc"
        }))
        .to_request();

    let body: RoomSearchResponse = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body.rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r1"]);
    assert_eq!(body.total_results, 2);
}

#[actix_web::test]
async fn test_room_search_limit_is_capped_at_max_limit() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/rooms/search")
        .set_json(json!({
            "rooms": [
                room("r2", 1200, "2025-04-15"),
                room("r1", 850, "2025-05-01"),
                room("r3", 900, "2025-05-15")
            ],
            "limit": 10
        }))
        .to_request();

    let body: RoomSearchResponse = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body.rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r3"]);
    assert_eq!(body.rooms.len(), 2);
    assert_eq!(body.total_results, 3);
}
