use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::domain::document::{ContentDocument, SectionKind};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SectionResponseBody {
    /// The section document, shaped per section kind
    #[schema(value_type = Object)]
    pub document: serde_json::Value,

    /// Revision the document was read at; null when the default is served
    #[schema(example = 4)]
    pub revision: Option<i64>,
}

/// Read a section
///
/// Public endpoint backing the portfolio page. Never fails on content
/// grounds: a missing or malformed stored document degrades to the
/// built-in default for the section.
#[utoipa::path(
    get,
    path = "/api/content/{kind}",
    tag = "content",
    params(
        ("kind" = String, Path, description = "Section kind (hero, experience, certifications, projects, tech-stack, testimonials, network, quick-nav)"),
    ),
    responses(
        (status = 200, description = "Section document", body = inline(SuccessResponse<SectionResponseBody>)),
        (status = 404, description = "Unknown section kind", body = ErrorResponse),
    )
)]
#[get("/api/content/{kind}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = SectionKind::parse(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such section");
    };

    let loaded = data.load_section_use_case.execute(kind).await;

    let document = match loaded.document.to_body() {
        Ok(body) => body,
        Err(e) => {
            error!(section = %kind, error = %e, "Could not serialize section document");
            return ApiResponse::internal_error();
        }
    };

    ApiResponse::success(SectionResponseBody {
        document,
        revision: loaded.revision,
    })
}
