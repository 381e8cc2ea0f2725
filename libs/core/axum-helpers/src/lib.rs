//! # Axum Helpers
//!
//! Shared plumbing for the HTTP services in this workspace.
//!
//! - **[`errors`]**: [`AppError`], [`ErrorResponse`] and [`ErrorCode`], the
//!   fallback and panic handlers, OpenAPI error responses
//! - **[`extractors`]**: [`IdPath`], [`QueryParams`] and [`ValidatedJson`],
//!   whose rejections render as [`ErrorResponse`]
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, QueryParams, ValidatedJson};
