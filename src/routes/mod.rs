// Route exports
pub mod businesses;
pub mod matches;
pub mod profiles;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;

use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::Catalog;

/// Header carrying the caller's id, set by the upstream identity layer
pub const USER_ID_HEADER: &str = "x-user-id";
/// Caller id used when the header is absent
pub const DEFAULT_USER_ID: &str = "default-user";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub matcher: Matcher,
    /// Listings considered per curated-matches request
    pub catalog_size: usize,
    /// Ceiling for caller-supplied ranking limits
    pub max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(businesses::configure)
            .configure(profiles::configure),
    );
}

/// Resolve the calling user from the request headers
pub fn caller_id(req: &HttpRequest) -> String {
    req.headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
        .to_string()
}

/// Parse a JSON body that callers may leave out entirely
///
/// An empty body yields `T::default()`. Anything else must deserialize, or the
/// caller gets the same `invalid_json` envelope as other malformed payloads.
pub(crate) fn optional_json<T>(body: &web::Bytes) -> Result<T, HttpResponse>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::info!("Rejected request body: {}", e);
        HttpResponse::BadRequest().json(ErrorResponse::new("invalid_json", format!("Invalid JSON: {}", e)))
    })
}

pub(crate) fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
}

pub(crate) fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("NOT_FOUND", message))
}

pub(crate) fn internal_error(code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(code, message))
}
