use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::auth::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SessionResponseBody {
    /// Whether the request carries a live admin session
    #[schema(example = true)]
    pub authenticated: bool,
}

/// Session probe
///
/// Always answers 200; a missing or stale cookie simply reads as not
/// authenticated. The admin UI polls this on load to decide which chrome
/// to render.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    responses(
        (status = 200, description = "Session state", body = inline(SuccessResponse<SessionResponseBody>)),
    )
)]
#[get("/api/admin/session")]
pub async fn session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let authenticated = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => match data.check_session_use_case.execute(cookie.value()).await {
            Ok(valid) => valid,
            Err(e) => {
                error!(error = %e, "Session lookup failed");
                false
            }
        },
        None => false,
    };

    ApiResponse::success(SessionResponseBody { authenticated })
}
