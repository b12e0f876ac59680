use actix_web::{web, HttpResponse, Responder};

use crate::models::{ApiResponse, BuyerProfile, MessageResponse};
use crate::routes::{bad_request, internal_error, AppState};
use crate::services::PostgresError;

/// Configure buyer profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles/{user_id}", web::get().to(get_profile))
        .route("/profiles/{user_id}", web::put().to(put_profile));
}

/// GET /api/v1/profiles/{userId}
///
/// Users who never completed onboarding get an empty profile.
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.catalog.profile(&user_id).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::ok(profile)),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            internal_error("PROFILE_ERROR", "Failed to fetch profile")
        }
    }
}

/// Replace a buyer's onboarding answers
///
/// PUT /api/v1/profiles/{userId}
///
/// Request body is the questionnaire answer map:
/// ```json
/// { "budget": "$1M - $5M", "industries": "Technology", "location": "Boston, MA" }
/// ```
async fn put_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BuyerProfile>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.catalog.save_profile(&user_id, &body).await {
        Ok(()) => {
            tracing::info!("Updated buyer profile for {}", user_id);
            HttpResponse::Ok().json(MessageResponse::new("Profile saved successfully"))
        }
        Err(PostgresError::InvalidInput(message)) => bad_request(message),
        Err(e) => {
            tracing::error!("Failed to store profile for {}: {}", user_id, e);
            internal_error("PROFILE_ERROR", "Failed to save profile")
        }
    }
}
