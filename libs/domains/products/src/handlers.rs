use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestParamsResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    IdPath, QueryParams, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{PageParams, ProductDto, ProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        save_product,
        get_products,
        get_product,
        delete_product,
        get_products_paginated,
    ),
    components(
        schemas(ProductDto, ProductResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestParamsResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product CRUD and paging endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/save-product", post(save_product))
        .route("/products", get(get_products))
        .route("/product/{id}", get(get_product).delete(delete_product))
        .route("/page-products", get(get_products_paginated))
        .with_state(shared_service)
}

/// Insert a product, or overwrite it when `id` names an existing one
#[utoipa::path(
    post,
    path = "/save-product",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product saved", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    service.save_product(dto).await?;
    Ok((StatusCode::CREATED, "saved success"))
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 204, description = "No products stored"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Response> {
    let products = service.get_all_products().await?;

    if products.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(products).into_response())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, response = BadRequestParamsResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductDto>> {
    let product = service.get_product_by_id(id).await?;
    Ok(Json(product))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestParamsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok((StatusCode::OK, "Delete success"))
}

/// One page of products, sorted
#[utoipa::path(
    get,
    path = "/page-products",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Requested page with metadata", body = ProductResponse),
        (status = 400, response = BadRequestParamsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_paginated<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(params): QueryParams<PageParams>,
) -> ProductResult<Json<ProductResponse>> {
    let response = service
        .get_products_with_pagination(
            params.page_no,
            params.page_size,
            &params.sort_by,
            &params.sort_dir,
        )
        .await?;
    Ok(Json(response))
}
