use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

// Save requests carry file bytes base64-encoded inside the JSON body, so
// the limit must cover the largest allowed image (~10 MB) after the ~4/3
// base64 blowup, plus the document itself.
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
