use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductDto, ProductResponse};
use crate::pagination::PageRequest;
use crate::repository::ProductRepository;

/// Service layer for Product operations
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Insert or overwrite a product
    #[instrument(skip(self, dto), fields(product_id = ?dto.id))]
    pub async fn save_product(&self, dto: ProductDto) -> ProductResult<()> {
        dto.validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        match self.repository.save(dto.into()).await? {
            Some(_) => Ok(()),
            None => Err(ProductError::NotSaved),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i32) -> ProductResult<ProductDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotDeleted(id));
        }
        Ok(())
    }

    /// One zero-based page of products sorted by `sort_by`.
    ///
    /// `sort_dir` is ascending only when it equals `"asc"` ignoring case.
    #[instrument(skip(self))]
    pub async fn get_products_with_pagination(
        &self,
        page_no: i32,
        page_size: i32,
        sort_by: &str,
        sort_dir: &str,
    ) -> ProductResult<ProductResponse> {
        let request = PageRequest::new(page_no, page_size, sort_by, sort_dir)?;
        let page = self.repository.find_page(request).await?;
        Ok(page.into())
    }
}
