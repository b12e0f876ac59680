use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::core::{matches_search, paginate};
use crate::models::{
    ApiResponse, InquiryStatus, InquiryStatusRequest, InterestRequest, Listing, MatchesQuery,
    MatchesResponse, MessageResponse, SaveListingRequest, SearchQuery, StarListingRequest, TrackedQuery,
    TrackingKind,
};
use crate::routes::{bad_request, caller_id, internal_error, not_found, optional_json, AppState};
use crate::services::{PostgresError, TrackingDetails};

/// Configure listing routes
///
/// Fixed paths are registered before `/businesses/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/businesses/search", web::get().to(search_listings))
        .route("/businesses/matches", web::get().to(curated_matches))
        .route("/businesses/tracked", web::get().to(tracked_listings))
        .route("/businesses/tracked/stats", web::get().to(tracking_stats))
        .route("/businesses/{id}", web::get().to(get_listing))
        .route("/businesses/{id}/save", web::post().to(save_listing))
        .route("/businesses/{id}/save", web::delete().to(unsave_listing))
        .route("/businesses/{id}/star", web::post().to(star_listing))
        .route("/businesses/{id}/star", web::delete().to(unstar_listing))
        .route("/businesses/{id}/interest", web::post().to(express_interest))
        .route("/businesses/{id}/interest", web::patch().to(update_interest));
}

/// Search the catalog
///
/// GET /api/v1/businesses/search?q=&industry=&location=&minPrice=&maxPrice=&minRevenue=&maxRevenue=&page=&pageSize=
///
/// Search results never carry match scores.
async fn search_listings(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request(errors.to_string());
    }

    let listings = match state.catalog.listings().await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to load catalog for search: {}", e);
            return internal_error("SEARCH_ERROR", "Failed to search businesses");
        }
    };

    let response = search_page(listings, &query);

    tracing::debug!(
        "Search returned {} of {} hits",
        response.data.len(),
        response.pagination.map_or(0, |p| p.total)
    );

    HttpResponse::Ok().json(response)
}

/// Filter the catalog and cut out the requested page
fn search_page(listings: Vec<Listing>, query: &SearchQuery) -> ApiResponse<Vec<Listing>> {
    let filter = query.filter();
    let hits: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| matches_search(listing, &filter))
        .collect();

    let (page, pagination) = paginate(hits, query.page, query.page_size);
    ApiResponse::paginated(page, pagination)
}

/// Curated matches for the calling buyer
///
/// GET /api/v1/businesses/matches?minScore=&limit=
///
/// Ranks the newest catalog listings against the caller's stored profile.
async fn curated_matches(
    state: web::Data<AppState>,
    query: web::Query<MatchesQuery>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return bad_request(errors.to_string());
    }

    let user_id = caller_id(&req);

    let profile = match state.catalog.profile(&user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return internal_error("MATCHES_ERROR", "Failed to fetch matches");
        }
    };

    let mut candidates = match state.catalog.listings().await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to load catalog for {}: {}", user_id, e);
            return internal_error("MATCHES_ERROR", "Failed to fetch matches");
        }
    };
    candidates.truncate(state.catalog_size);

    if profile.is_empty() {
        tracing::debug!("No onboarding answers for {}, using fallback score", user_id);
    }

    let settings = state.matcher.settings();
    let min_score = query.min_score.unwrap_or(settings.min_score);
    let limit = query.limit.unwrap_or(settings.limit).min(state.max_limit);

    let result = state
        .matcher
        .rank_and_filter(&profile, candidates, min_score, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchesResponse {
        success: true,
        data: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// GET /api/v1/businesses/{id}
async fn get_listing(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let listing_id = path.into_inner();

    match state.catalog.listing(&listing_id).await {
        Ok(Some(listing)) => HttpResponse::Ok().json(ApiResponse::ok(listing)),
        Ok(None) => not_found("Business not found"),
        Err(e) => {
            tracing::error!("Failed to fetch listing {}: {}", listing_id, e);
            internal_error("FETCH_ERROR", "Failed to fetch business")
        }
    }
}

/// POST /api/v1/businesses/{id}/save
///
/// The body is optional; a present but malformed body is rejected.
async fn save_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
    req: HttpRequest,
) -> impl Responder {
    let body: SaveListingRequest = match optional_json(&body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    if let Err(errors) = body.validate() {
        return bad_request(errors.to_string());
    }

    let details = TrackingDetails {
        notes: body.notes,
        tags: body.tags,
        ..Default::default()
    };

    track(&state, &caller_id(&req), &path.into_inner(), TrackingKind::Saved, details, "SAVE_ERROR").await
}

/// DELETE /api/v1/businesses/{id}/save
async fn unsave_listing(state: web::Data<AppState>, path: web::Path<String>, req: HttpRequest) -> impl Responder {
    untrack(&state, &caller_id(&req), &path.into_inner(), TrackingKind::Saved, "UNSAVE_ERROR").await
}

/// POST /api/v1/businesses/{id}/star
async fn star_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
    req: HttpRequest,
) -> impl Responder {
    let body: StarListingRequest = match optional_json(&body) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let details = TrackingDetails {
        priority: body.priority,
        ..Default::default()
    };

    track(&state, &caller_id(&req), &path.into_inner(), TrackingKind::Starred, details, "STAR_ERROR").await
}

/// DELETE /api/v1/businesses/{id}/star
async fn unstar_listing(state: web::Data<AppState>, path: web::Path<String>, req: HttpRequest) -> impl Responder {
    untrack(&state, &caller_id(&req), &path.into_inner(), TrackingKind::Starred, "UNSTAR_ERROR").await
}

/// Record that the caller contacted the seller
///
/// POST /api/v1/businesses/{id}/interest
async fn express_interest(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
    req: HttpRequest,
) -> impl Responder {
    let body: InterestRequest = match optional_json(&body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    if let Err(errors) = body.validate() {
        return bad_request(errors.to_string());
    }

    let details = TrackingDetails {
        message: body.message,
        inquiry_status: Some(InquiryStatus::Pending),
        ..Default::default()
    };

    track(&state, &caller_id(&req), &path.into_inner(), TrackingKind::Contacted, details, "INTEREST_ERROR").await
}

/// PATCH /api/v1/businesses/{id}/interest
async fn update_interest(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<InquiryStatusRequest>,
    req: HttpRequest,
) -> impl Responder {
    let user_id = caller_id(&req);
    let listing_id = path.into_inner();

    match state
        .catalog
        .postgres()
        .update_inquiry_status(&user_id, &listing_id, body.status)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Inquiry status updated")),
        Err(PostgresError::NotFound(message)) => not_found(message),
        Err(e) => {
            tracing::error!("Failed to update inquiry {} -> {}: {}", user_id, listing_id, e);
            internal_error("INTEREST_ERROR", "Failed to update inquiry status")
        }
    }
}

/// GET /api/v1/businesses/tracked?kind=saved|starred|contacted
async fn tracked_listings(
    state: web::Data<AppState>,
    query: web::Query<TrackedQuery>,
    req: HttpRequest,
) -> impl Responder {
    let user_id = caller_id(&req);

    match state.catalog.postgres().tracked_listings(&user_id, query.kind).await {
        Ok(tracked) => HttpResponse::Ok().json(ApiResponse::ok(tracked)),
        Err(e) => {
            tracing::error!("Failed to fetch tracked listings for {}: {}", user_id, e);
            internal_error("FETCH_ERROR", "Failed to fetch tracked businesses")
        }
    }
}

/// GET /api/v1/businesses/tracked/stats
async fn tracking_stats(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user_id = caller_id(&req);

    match state.catalog.postgres().tracking_stats(&user_id).await {
        Ok(stats) => HttpResponse::Ok().json(ApiResponse::ok(stats)),
        Err(e) => {
            tracing::error!("Failed to fetch tracking stats for {}: {}", user_id, e);
            internal_error("FETCH_ERROR", "Failed to fetch tracking stats")
        }
    }
}

async fn track(
    state: &AppState,
    user_id: &str,
    listing_id: &str,
    kind: TrackingKind,
    details: TrackingDetails,
    error_code: &str,
) -> HttpResponse {
    match state.catalog.listing(listing_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found("Business not found"),
        Err(e) => {
            tracing::error!("Failed to look up listing {}: {}", listing_id, e);
            return internal_error(error_code, "Failed to update business");
        }
    }

    match state.catalog.postgres().track(user_id, listing_id, kind, details).await {
        Ok(()) => {
            tracing::debug!("{} marked {} as {:?}", user_id, listing_id, kind);
            HttpResponse::Ok().json(MessageResponse::new(format!("Business {} successfully", past_tense(kind))))
        }
        Err(e) => {
            tracing::error!("Failed to track {} -> {} ({:?}): {}", user_id, listing_id, kind, e);
            internal_error(error_code, "Failed to update business")
        }
    }
}

async fn untrack(
    state: &AppState,
    user_id: &str,
    listing_id: &str,
    kind: TrackingKind,
    error_code: &str,
) -> HttpResponse {
    match state.catalog.postgres().untrack(user_id, listing_id, kind).await {
        Ok(removed) => {
            tracing::debug!("{} cleared {:?} on {} (existed: {})", user_id, kind, listing_id, removed);
            HttpResponse::Ok().json(MessageResponse::new(format!("Business un{} successfully", past_tense(kind))))
        }
        Err(e) => {
            tracing::error!("Failed to untrack {} -> {} ({:?}): {}", user_id, listing_id, kind, e);
            internal_error(error_code, "Failed to update business")
        }
    }
}

fn past_tense(kind: TrackingKind) -> &'static str {
    match kind {
        TrackingKind::Saved => "saved",
        TrackingKind::Starred => "starred",
        TrackingKind::Contacted => "contacted",
    }
}
