use actix_web::{post, web, Responder};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::domain::document::{
    ContentDocument, FileSlot, SectionDocument, SectionKind,
};
use crate::modules::editor::application::save::SaveError;
use crate::modules::editor::application::session::{EditSession, StageFileError};
use crate::modules::media::application::policies::upload_policy::LocalFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SaveFileDto {
    /// Document field the file belongs to
    #[schema(example = "banner_image")]
    pub field: String,

    /// List item id when the field lives inside a list item
    #[serde(default)]
    #[schema(example = "cert-1739452800000")]
    pub item_id: Option<String>,

    #[schema(example = "banner.png")]
    pub file_name: String,

    #[schema(example = "image/png")]
    pub content_type: String,

    /// File bytes, base64-encoded
    pub data_base64: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SaveSectionRequestDto {
    /// The edited document, with file-bearing fields still holding their
    /// previous URLs
    #[schema(value_type = Object)]
    pub document: serde_json::Value,

    #[serde(default)]
    #[schema(example = 4)]
    pub expected_revision: Option<i64>,

    #[serde(default)]
    pub files: Vec<SaveFileDto>,
}

#[derive(Serialize, ToSchema)]
pub struct SaveSectionResponseBody {
    /// The committed document, with uploaded file URLs substituted in
    #[schema(value_type = Object)]
    pub document: serde_json::Value,

    /// Revision after the commit
    #[schema(example = 5)]
    pub revision: i64,
}

/// Save a section with file uploads
///
/// Runs the full pipeline: validate and upload every file, substitute
/// the resolved URLs into the document, then commit it wholesale. The
/// commit happens only after every upload succeeded; a failure anywhere
/// leaves the stored document untouched.
#[utoipa::path(
    post,
    path = "/api/content/{kind}/save",
    tag = "content",
    request_body = SaveSectionRequestDto,
    params(
        ("kind" = String, Path, description = "Section kind"),
    ),
    responses(
        (status = 200, description = "Saved", body = inline(SuccessResponse<SaveSectionResponseBody>)),
        (status = 400, description = "Invalid document or rejected file", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown section kind", body = ErrorResponse),
        (status = 409, description = "Revision conflict", body = ErrorResponse),
        (status = 502, description = "Upload to blob storage failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/content/{kind}/save")]
pub async fn save_section_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<SaveSectionRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(kind) = SectionKind::parse(&path.into_inner()) else {
        return ApiResponse::not_found("UNKNOWN_SECTION", "No such section");
    };

    let dto = req.into_inner();
    let document = match SectionDocument::from_body(kind, dto.document) {
        Ok(document) => document,
        Err(e) => {
            return ApiResponse::bad_request("INVALID_DOCUMENT", &e.to_string());
        }
    };

    let mut session = EditSession::new(document, dto.expected_revision);
    session.open_edit();

    for file in dto.files {
        let bytes = match BASE64.decode(&file.data_base64) {
            Ok(bytes) => bytes,
            Err(_) => {
                return ApiResponse::bad_request(
                    "INVALID_FILE_DATA",
                    &format!("File {} is not valid base64", file.file_name),
                );
            }
        };

        let slot = FileSlot {
            field: file.field,
            item_id: file.item_id,
        };
        let local = LocalFile {
            name: file.file_name,
            content_type: file.content_type,
            bytes,
        };

        match session.stage_file(slot, local, &data.upload_policy) {
            Ok(_) => {}
            Err(StageFileError::Rejected(rejection)) => {
                return ApiResponse::bad_request("FILE_REJECTED", &rejection.to_string());
            }
            Err(StageFileError::NotEditing) => {
                return ApiResponse::internal_error();
            }
        }
    }

    match data.save_coordinator.save(&mut session).await {
        Ok(outcome) => {
            info!(section = %kind, revision = outcome.revision, "Section saved");
            match session.confirmed().to_body() {
                Ok(document) => ApiResponse::success(SaveSectionResponseBody {
                    document,
                    revision: outcome.revision,
                }),
                Err(e) => {
                    error!(section = %kind, error = %e, "Committed document failed to serialize");
                    ApiResponse::internal_error()
                }
            }
        }

        Err(SaveError::Conflict) => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "The section was changed by someone else",
        ),

        Err(SaveError::Upload(ref e)) => {
            error!(section = %kind, error = %e, "Upload failed");
            ApiResponse::error(
                actix_web::http::StatusCode::BAD_GATEWAY,
                "UPLOAD_FAILED",
                "A file could not be uploaded",
            )
        }

        Err(ref e) => {
            error!(section = %kind, error = %e, "Save failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        failing_blob_coordinator, memory_coordinator, session_cookie,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_save_uploads_and_commits() {
        let (coordinator, store) = memory_coordinator();
        let app_state = TestAppStateBuilder::default()
            .with_save_coordinator(coordinator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(save_section_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/content/hero/save")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": { "name": "Ada" },
                "files": [{
                    "field": "banner_image",
                    "file_name": "banner.png",
                    "content_type": "image/png",
                    "data_base64": BASE64.encode(b"fake image bytes")
                }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["revision"], 1);
        assert_eq!(body["data"]["document"]["name"], "Ada");

        let stored = store.document(SectionKind::Hero).expect("stored document");
        assert_eq!(stored["name"], "Ada");
        assert!(stored["banner_image"]
            .as_str()
            .unwrap()
            .starts_with("https://storage.googleapis.com/"));
    }

    #[actix_web::test]
    async fn test_rejected_file_is_400_and_nothing_is_stored() {
        let (coordinator, store) = memory_coordinator();
        let app_state = TestAppStateBuilder::default()
            .with_save_coordinator(coordinator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(save_section_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/content/hero/save")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": {},
                "files": [{
                    "field": "banner_image",
                    "file_name": "notes.txt",
                    "content_type": "text/plain",
                    "data_base64": BASE64.encode(b"hello")
                }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FILE_REJECTED");
        assert!(store.document(SectionKind::Hero).is_none());
    }

    #[actix_web::test]
    async fn test_upload_failure_is_502_and_nothing_is_stored() {
        let (coordinator, store) = failing_blob_coordinator();
        let app_state = TestAppStateBuilder::default()
            .with_save_coordinator(coordinator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(save_section_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/content/hero/save")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": {},
                "files": [{
                    "field": "banner_image",
                    "file_name": "banner.png",
                    "content_type": "image/png",
                    "data_base64": BASE64.encode(b"fake image bytes")
                }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPLOAD_FAILED");
        assert!(store.document(SectionKind::Hero).is_none());
    }

    #[actix_web::test]
    async fn test_save_conflicts_when_revision_moved() {
        let (coordinator, store) = memory_coordinator();
        store.seed(SectionKind::Hero, serde_json::json!({ "name": "Old" }), 3);

        let app_state = TestAppStateBuilder::default()
            .with_save_coordinator(coordinator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(save_section_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/content/hero/save")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": { "name": "New" },
                "expected_revision": 2
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let stored = store.document(SectionKind::Hero).unwrap();
        assert_eq!(stored["name"], "Old");
    }

    #[actix_web::test]
    async fn test_save_without_session_is_401() {
        let (coordinator, _store) = memory_coordinator();
        let app_state = TestAppStateBuilder::default()
            .with_save_coordinator(coordinator)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(save_section_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/content/hero/save")
            .set_json(serde_json::json!({ "document": {} }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
