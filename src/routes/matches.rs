use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{HealthResponse, MatchesResponse, RankRequest};
use crate::routes::{bad_request, internal_error, AppState};

/// Configure health and ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_listings));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.catalog.postgres().health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank listings against an explicit buyer profile
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "budget": "$1M - $5M", "industries": "Technology" },
///   "listings": [ ... ],
///   "minScore": 60,
///   "limit": 30
/// }
/// ```
///
/// Without `listings` the current catalog is ranked.
async fn rank_listings(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return bad_request(errors.to_string());
    }

    let RankRequest {
        profile,
        listings,
        min_score,
        limit,
    } = req.into_inner();

    let candidates = match listings {
        Some(listings) => listings,
        None => match state.catalog.listings().await {
            Ok(mut listings) => {
                listings.truncate(state.catalog_size);
                listings
            }
            Err(e) => {
                tracing::error!("Failed to load catalog for ranking: {}", e);
                return internal_error("MATCHES_ERROR", "Failed to load listings");
            }
        },
    };

    let settings = state.matcher.settings();
    let min_score = min_score.unwrap_or(settings.min_score);
    let limit = limit.unwrap_or(settings.limit).min(state.max_limit);

    let result = state
        .matcher
        .rank_and_filter(&profile, candidates, min_score, limit);

    tracing::debug!(
        "Ranked {} of {} listings (min score {}, limit {})",
        result.matches.len(),
        result.total_candidates,
        min_score,
        limit
    );

    HttpResponse::Ok().json(MatchesResponse {
        success: true,
        data: result.matches,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use crate::routes::configure_routes;
    use crate::routes::tests::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    fn listing(id: &str, price: f64, industry: &str) -> Value {
        json!({
            "id": id,
            "name": format!("Business {}", id),
            "industry": industry,
            "location": "Boston, MA",
            "askingPrice": price,
            "revenue": 2_000_000.0
        })
    }

    fn profile() -> Value {
        json!({
            "budget": "$1M - $5M",
            "industries": "Technology",
            "location": "Boston, MA",
            "revenuePreference": "$1M - $5M"
        })
    }

    #[actix_web::test]
    async fn test_rank_caps_caller_limit() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(2)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/matches/rank")
            .set_json(json!({
                "profile": profile(),
                "listings": [
                    listing("a", 2_000_000.0, "Technology"),
                    listing("b", 6_000_000.0, "Technology"),
                    listing("c", 2_000_000.0, "Technology"),
                    listing("d", 50_000_000.0, "Retail")
                ],
                "minScore": 0,
                "limit": 50
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["totalCandidates"], 4);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(body["data"][0]["matchScore"], 95);
    }

    #[actix_web::test]
    async fn test_rank_uses_configured_min_score() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(100)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/matches/rank")
            .set_json(json!({
                "profile": profile(),
                "listings": [
                    listing("a", 2_000_000.0, "Technology"),
                    listing("d", 50_000_000.0, "Retail")
                ]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalCandidates"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["id"], "a");
    }

    #[actix_web::test]
    async fn test_rank_rejects_out_of_range_min_score() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(100)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/matches/rank")
            .set_json(json!({ "listings": [], "minScore": 101 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
