//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "code": 2003,
        "error": "DATABASE_ERROR",
        "message": "A database error occurred."
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "name": [{
                "code": "blank",
                "message": "name must not be blank",
                "params": {"value": "  "}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed query string or path parameter",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "code": 1006,
        "error": "INVALID_QUERY",
        "message": "Failed to deserialize query string: pageNo: invalid digit found in string"
    })
)]
pub struct BadRequestParamsResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Product not found with id=42"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
