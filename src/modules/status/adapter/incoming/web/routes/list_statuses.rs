use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::status::application::ports::status_channel::StatusKind;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct StatusDto {
    #[schema(example = 3)]
    pub handle: u64,

    #[schema(example = "Saving hero...")]
    pub message: String,

    #[schema(value_type = String, example = "pending")]
    pub kind: StatusKind,

    /// Save progress in percent, when known
    #[schema(example = 40)]
    pub progress: Option<u8>,
}

#[derive(Serialize, ToSchema)]
pub struct StatusListResponseBody {
    pub statuses: Vec<StatusDto>,
}

/// Live save statuses
///
/// Snapshot of the status toasts, most recent first. The admin UI polls
/// this while a save runs its asynchronous tail.
#[utoipa::path(
    get,
    path = "/api/admin/statuses",
    tag = "admin",
    responses(
        (status = 200, description = "Current statuses", body = inline(SuccessResponse<StatusListResponseBody>)),
    )
)]
#[get("/api/admin/statuses")]
pub async fn list_statuses_handler(_admin: AdminSession, data: web::Data<AppState>) -> impl Responder {
    let statuses = data
        .statuses
        .snapshot()
        .into_iter()
        .map(|entry| StatusDto {
            handle: entry.handle,
            message: entry.message,
            kind: entry.kind,
            progress: entry.progress,
        })
        .collect();

    ApiResponse::success(StatusListResponseBody { statuses })
}
