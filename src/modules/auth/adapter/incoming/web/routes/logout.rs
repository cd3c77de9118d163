use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Admin logout
///
/// Closes the server-side session and expires the cookie. Succeeds even
/// when no session cookie is present.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Session closed", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = data.logout_admin_use_case.execute(cookie.value()).await {
            error!(error = %e, "Logout failed");
            return ApiResponse::internal_error();
        }
    }

    // Expire the cookie regardless of whether a session existed.
    let expired = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::ZERO)
        .finish();

    HttpResponse::Ok().cookie(expired).json(ApiResponse {
        success: true,
        data: Some(LogoutResponseBody {
            message: "Logged out".to_string(),
        }),
        error: None,
    })
}
