use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use std::any::Any;

use super::{ErrorCode, ErrorResponse};

/// Router fallback for unknown paths.
pub async fn not_found() -> axum::response::Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound,
        ErrorCode::RouteNotFound.default_message(),
    )
    .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> axum::response::Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed,
        ErrorCode::MethodNotAllowed.default_message(),
    )
    .into_response()
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
///
/// The panic payload is logged; the client always gets the same 500 body.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::Panic.code(),
        panic = detail,
        "Request handler panicked"
    );

    ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::Panic,
        ErrorCode::Panic.default_message(),
    )
    .into_response()
}
