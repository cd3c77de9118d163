use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct VerifyPathRequestDto {
    /// Candidate admin path segment
    pub path: String,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyPathResponseBody {
    #[schema(example = false)]
    pub valid: bool,
}

/// Admin path check
///
/// Answers whether a path segment is the configured admin entry. Always
/// 200 so the response shape leaks nothing beyond the boolean.
#[utoipa::path(
    post,
    path = "/api/admin/verify-path",
    tag = "admin",
    request_body = VerifyPathRequestDto,
    responses(
        (status = 200, description = "Path checked", body = inline(SuccessResponse<VerifyPathResponseBody>)),
    )
)]
#[post("/api/admin/verify-path")]
pub async fn verify_path_handler(
    req: web::Json<VerifyPathRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let valid = data.verify_admin_path_use_case.execute(&req.path);
    ApiResponse::success(VerifyPathResponseBody { valid })
}
