use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with id={0}")]
    NotFound(i32),

    #[error("product not saved")]
    NotSaved,

    #[error("Product not Deleted")]
    NotDeleted(i32),

    #[error("No property '{0}' found for type 'Product'")]
    InvalidSortField(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::NotSaved => AppError::InternalServerError(err.to_string()),
            ProductError::NotDeleted(id) => {
                tracing::warn!(product_id = id, "Delete requested for missing product");
                AppError::InternalServerError(err.to_string())
            }
            ProductError::InvalidSortField(_) => AppError::BadRequest(err.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
