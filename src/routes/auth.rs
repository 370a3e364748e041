use actix_web::{web, HttpResponse};
use crate::core::validate_change_password;
use crate::models::ChangePasswordRequest;
use crate::routes::filters::validation_failed;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/password/validate", web::post().to(validate_password));
}

/// Check a change-password form before it goes to the account backend
///
/// POST /api/v1/auth/password/validate
///
/// Request body:
/// ```json
/// {
///   "current_password": "string",
///   "new_password": "string",
///   "confirm_new_password": "string"
/// }
/// ```
async fn validate_password(req: web::Json<ChangePasswordRequest>) -> HttpResponse {
    match validate_change_password(&req) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(errors) => {
            tracing::info!("Change-password form rejected: fields={:?}", errors.fields().collect::<Vec<_>>());
            validation_failed(errors)
        }
    }
}
