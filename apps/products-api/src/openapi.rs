//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product CRUD and paging REST API backed by PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        axum_helpers::server::health::health_handler,
        crate::api::health::ready
    ),
    components(schemas(axum_helpers::HealthResponse)),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation for Products API
///
/// Product routes are served at the root, so the domain document is merged
/// rather than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_products::handlers::ApiDoc::openapi());
        doc
    }
}
