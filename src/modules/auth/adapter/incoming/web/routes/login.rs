use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::login_admin::LoginAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin password
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponseBody {
    #[schema(example = "Logged in")]
    pub message: String,
}

/// Admin login
///
/// Verifies the admin password and opens a session. The session token is
/// delivered as an HttpOnly cookie; the body carries no credentials.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session opened", body = inline(SuccessResponse<LoginResponseBody>)),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 503, description = "Admin access not configured", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.login_admin_use_case.execute(&dto.password).await {
        Ok(response) => {
            info!("Admin logged in");

            let cookie = Cookie::build(SESSION_COOKIE, response.token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Strict)
                .max_age(CookieDuration::seconds(data.session_ttl.as_secs() as i64))
                .finish();

            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                success: true,
                data: Some(LoginResponseBody {
                    message: "Logged in".to_string(),
                }),
                error: None,
            })
        }

        Err(LoginAdminError::InvalidPassword) => {
            warn!("Admin login failed: wrong password");
            ApiResponse::unauthorized("INVALID_PASSWORD", "Invalid password")
        }

        Err(LoginAdminError::NotConfigured) => ApiResponse::error(
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
            "ADMIN_NOT_CONFIGURED",
            "Admin access is not configured",
        ),

        Err(LoginAdminError::Hash(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginAdminError::Session(ref e)) => {
            error!(error = %e, "Session store failed");
            ApiResponse::internal_error()
        }
    }
}
