use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::content::application::use_cases::commit_section::CommitSectionError;
use crate::modules::content::domain::document::{SectionDocument, SectionKind};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct PutSectionRequestDto {
    /// Whole replacement document for the section
    #[schema(value_type = Object)]
    pub document: serde_json::Value,

    /// Revision the editor loaded; null when it saw no stored document
    #[serde(default)]
    #[schema(example = 4)]
    pub expected_revision: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct PutSectionResponseBody {
    /// Revision after the commit
    #[schema(example = 5)]
    pub revision: i64,
}

/// Replace a section document
///
/// Admin endpoint for saves that carry no file uploads. The document is
/// committed wholesale against the revision the editor loaded.
#[utoipa::path(
    put,
    path = "/api/content/{kind}",
    tag = "content",
    request_body = PutSectionRequestDto,
    params(
        ("kind" = String, Path, description = "Section kind"),
    ),
    responses(
        (status = 200, description = "Committed", body = inline(SuccessResponse<PutSectionResponseBody>)),
        (status = 400, description = "Document does not fit the section shape", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Unknown section kind", body = ErrorResponse),
        (status = 409, description = "Revision conflict", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/content/{kind}")]
pub async fn put_section_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<PutSectionRequestDto>,
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

    match data
        .commit_section_use_case
        .execute(document, dto.expected_revision)
        .await
    {
        Ok(revision) => {
            info!(section = %kind, revision, "Section committed");
            ApiResponse::success(PutSectionResponseBody { revision })
        }

        Err(CommitSectionError::Conflict) => ApiResponse::conflict(
            "REVISION_CONFLICT",
            "The section was changed by someone else",
        ),

        Err(CommitSectionError::Serialization(ref e)) => {
            error!(section = %kind, error = %e, "Serialization failed");
            ApiResponse::internal_error()
        }

        Err(CommitSectionError::Store(ref e)) => {
            error!(section = %kind, error = %e, "Content store failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::use_cases::commit_section::ICommitSectionUseCase;
    use crate::modules::content::domain::document::ContentDocument;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::session_cookie;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockCommitOk;

    #[async_trait]
    impl ICommitSectionUseCase for MockCommitOk {
        async fn execute(
            &self,
            document: SectionDocument,
            expected_revision: Option<i64>,
        ) -> Result<i64, CommitSectionError> {
            assert_eq!(document.kind(), SectionKind::Hero);
            Ok(expected_revision.unwrap_or(0) + 1)
        }
    }

    struct MockCommitConflict;

    #[async_trait]
    impl ICommitSectionUseCase for MockCommitConflict {
        async fn execute(
            &self,
            _document: SectionDocument,
            _expected_revision: Option<i64>,
        ) -> Result<i64, CommitSectionError> {
            Err(CommitSectionError::Conflict)
        }
    }

    #[actix_web::test]
    async fn test_put_commits_and_returns_new_revision() {
        let app_state = TestAppStateBuilder::default()
            .with_commit_section(MockCommitOk)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(put_section_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/content/hero")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": { "name": "Ada" },
                "expected_revision": 4
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["revision"], 5);
    }

    #[actix_web::test]
    async fn test_put_without_session_is_401() {
        let app_state = TestAppStateBuilder::default()
            .with_commit_section(MockCommitOk)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(put_section_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/content/hero")
            .set_json(serde_json::json!({ "document": {} }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_put_with_wrong_shape_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_commit_section(MockCommitOk)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(put_section_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/content/projects")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": { "projects": "not-a-list" }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_DOCUMENT");
    }

    #[actix_web::test]
    async fn test_put_conflict_is_409() {
        let app_state = TestAppStateBuilder::default()
            .with_commit_section(MockCommitConflict)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(put_section_handler)).await;

        let req = test::TestRequest::put()
            .uri("/api/content/hero")
            .cookie(session_cookie())
            .set_json(serde_json::json!({
                "document": {},
                "expected_revision": 2
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REVISION_CONFLICT");
    }
}
