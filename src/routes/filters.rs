use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use crate::core::{FieldErrors, FilterFormSync};
use crate::models::{
    FilterOptionsResponse, FilterSelection, HealthResponse, NavigationResponse,
    ValidationErrorResponse, GENDERS, RELATIONSHIP_STATUSES,
};
use crate::services::{Navigator, RequestNavigator};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sync: Arc<FilterFormSync>,
}

impl AppState {
    pub fn new(sync: FilterFormSync) -> Self {
        Self { sync: Arc::new(sync) }
    }
}

/// Configure all filter-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/filters/options", web::get().to(filter_options))
        .route("/filters/hydrate", web::get().to(hydrate_filters))
        .route("/filters/submit", web::post().to(submit_filters))
        .route("/filters/reset", web::post().to(reset_filters));
}

/// 422 with one message per failing field
pub fn validation_failed(errors: FieldErrors) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ValidationErrorResponse {
        error: "Validation failed".to_string(),
        fields: errors.into_map(),
        status_code: 422,
    })
}

/// 303 to wherever the navigator was sent
fn redirect(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.clone()))
        .json(NavigationResponse { location })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Selectable values for every filter field
///
/// GET /api/v1/filters/options
async fn filter_options(state: web::Data<AppState>) -> impl Responder {
    let options = state.sync.options();

    HttpResponse::Ok().json(FilterOptionsResponse {
        hometown_filters: options.hometown_filters.clone(),
        work_filters: options.work_filters.clone(),
        education_filters: options.education_filters.clone(),
        genders: GENDERS.iter().map(|g| g.to_string()).collect(),
        relationship_statuses: RELATIONSHIP_STATUSES.iter().map(|s| s.to_string()).collect(),
    })
}

/// Form state encoded in the request's query string
///
/// GET /api/v1/filters/hydrate?search=...&hometown=...
async fn hydrate_filters(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let navigator = RequestNavigator::new(http_req.query_string());
    HttpResponse::Ok().json(state.sync.hydrate(&navigator))
}

/// Validate a selection and redirect to the filtered search
///
/// POST /api/v1/filters/submit?search={current search}
///
/// Request body:
/// ```json
/// {
///   "hometown": "Paris",
///   "work": null,
///   "education": "",
///   "gender": "Male",
///   "relationship_status": null
/// }
/// ```
async fn submit_filters(
    state: web::Data<AppState>,
    req: web::Json<FilterSelection>,
    http_req: HttpRequest,
) -> HttpResponse {
    let mut navigator = RequestNavigator::new(http_req.query_string());

    match state.sync.apply(&req, &mut navigator) {
        Ok(location) => {
            tracing::info!("Filters applied, navigating to {}", location);
            redirect(location)
        }
        Err(errors) => {
            tracing::info!("Validation failed for submit_filters request: {}", errors);
            validation_failed(errors)
        }
    }
}

/// Drop all filters and redirect to the plain search
///
/// POST /api/v1/filters/reset?search={current search}
async fn reset_filters(state: web::Data<AppState>, http_req: HttpRequest) -> HttpResponse {
    let mut navigator = RequestNavigator::new(http_req.query_string());
    let location = state.sync.reset(&mut navigator);

    tracing::info!(
        "Filters reset from '{}', navigating to {}",
        navigator.current_location_search(),
        location
    );
    redirect(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_status() {
        let mut errors = FieldErrors::new();
        errors.add("gender", "gender must be one of the following values: Male, Female, Others");

        let response = validation_failed(errors);
        assert_eq!(response.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_redirect_sets_location() {
        let response = redirect("/search/?search=x".to_string());

        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/search/?search=x")
        );
    }
}
