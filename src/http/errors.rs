use crate::result::error::LambdaError;
use http::StatusCode;
use lambda_http::Response;
use serde_json::json;

// error codes
pub const SERVER_ERROR_CODE: &str = "server_error";
pub const VALIDATION_ERROR_CODE: &str = "validation";

// messages
pub const SERVER_ERROR_MESSAGE: &str = "internal server error";

fn error_response(
    code: &'static str,
    message: String,
    status_code: StatusCode,
    cause: Option<LambdaError>,
) -> Response<String> {
    if let Some(e) = cause {
        tracing::error!(error = ?e, "{:?}", e);
    }
    let mut response = Response::new(error_response_body(code, message));
    let status = response.status_mut();
    *status = status_code;

    response
}

pub fn error_response_body(code: &'static str, message: String) -> String {
    json!({
        "code": code,
        "message": message,
    })
    .to_string()
}

pub fn unknown_error_response(cause: LambdaError) -> Response<String> {
    error_response(
        SERVER_ERROR_CODE,
        SERVER_ERROR_MESSAGE.to_owned(),
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(cause),
    )
}

pub fn validation_error_response(message: String, cause: Option<LambdaError>) -> Response<String> {
    error_response(
        VALIDATION_ERROR_CODE,
        message,
        StatusCode::BAD_REQUEST,
        cause,
    )
}
