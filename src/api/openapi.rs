use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Admin
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponseBody, LogoutResponseBody, SessionResponseBody,
    VerifyPathRequestDto, VerifyPathResponseBody,
};
// Content
use crate::modules::content::adapter::incoming::web::routes::{
    PutSectionRequestDto, PutSectionResponseBody, SectionResponseBody,
};
use crate::modules::editor::adapter::incoming::web::routes::{
    SaveFileDto, SaveSectionRequestDto, SaveSectionResponseBody,
};
use crate::modules::status::adapter::incoming::web::routes::{StatusDto, StatusListResponseBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio content service",
    ),
    paths(
        // Content endpoints
        crate::modules::content::adapter::incoming::web::routes::get_section_handler,
        crate::modules::content::adapter::incoming::web::routes::put_section_handler,
        crate::modules::editor::adapter::incoming::web::routes::save_section_handler,

        // Admin endpoints
        crate::modules::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::session_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_path_handler,
        crate::modules::status::adapter::incoming::web::routes::list_statuses_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SectionResponseBody>,
            ErrorResponse,
            ErrorDetail,

            // Content DTOs
            SectionResponseBody,
            PutSectionRequestDto,
            PutSectionResponseBody,
            SaveFileDto,
            SaveSectionRequestDto,
            SaveSectionResponseBody,

            // Admin DTOs
            LoginRequestDto,
            LoginResponseBody,
            LogoutResponseBody,
            SessionResponseBody,
            VerifyPathRequestDto,
            VerifyPathResponseBody,
            StatusDto,
            StatusListResponseBody,
        )
    ),
    tags(
        (name = "content", description = "Portfolio section documents"),
        (name = "admin", description = "Admin session and editing support"),
    )
)]
pub struct ApiDoc;
