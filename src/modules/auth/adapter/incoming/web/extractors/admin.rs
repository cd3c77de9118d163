use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Name of the session cookie set at login.
pub const SESSION_COOKIE: &str = "admin_session";

/// Proof that the request carries a live admin session.
///
/// Extracting this on a handler is the whole auth gate: the cookie token
/// is re-validated against the session store on every request, so a
/// revoked or expired session fails immediately, not at next page load.
#[derive(Debug, Clone)]
pub struct AdminSession;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>() else {
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(cookie) = req.cookie(SESSION_COOKIE) else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_SESSION",
                    "Admin session required",
                )));
            };

            match state.check_session_use_case.execute(cookie.value()).await {
                Ok(true) => Ok(AdminSession),
                Ok(false) => Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_SESSION",
                    "Session is invalid or expired",
                ))),
                Err(e) => {
                    tracing::error!(error = %e, "Session lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
