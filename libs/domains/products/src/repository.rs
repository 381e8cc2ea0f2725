use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, SaveProduct};
use crate::pagination::{Page, PageRequest, ProductSortField, SortDirection};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Overwrites the row when `input.id` names an existing product, otherwise
    /// inserts with a freshly generated id. `None` means the store reported
    /// nothing saved.
    async fn save(&self, input: SaveProduct) -> ProductResult<Option<Product>>;

    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Product, b: &Product, field: ProductSortField) -> Ordering {
    match field {
        ProductSortField::Id => a.id.cmp(&b.id),
        ProductSortField::Name => a.name.cmp(&b.name),
        ProductSortField::Description => a.description.cmp(&b.description),
        ProductSortField::Price => a.price.total_cmp(&b.price),
        ProductSortField::Quantity => a.quantity.cmp(&b.quantity),
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.inner.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.inner.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn save(&self, input: SaveProduct) -> ProductResult<Option<Product>> {
        let mut store = self.inner.write().await;

        let id = match input.id {
            Some(id) if store.products.contains_key(&id) => id,
            _ => {
                store.last_id += 1;
                store.last_id
            }
        };

        let product = input.into_product(id);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Saved product");
        Ok(Some(product))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.inner.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        let store = self.inner.read().await;

        let mut rows: Vec<Product> = store.products.values().cloned().collect();
        rows.sort_by(|a, b| {
            let primary = match request.direction {
                SortDirection::Asc => compare(a, b, request.sort_by),
                SortDirection::Desc => compare(b, a, request.sort_by),
            };
            primary.then(a.id.cmp(&b.id))
        });

        let total = rows.len() as u64;
        let content = rows
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(request.page_size).unwrap_or(usize::MAX))
            .collect();

        Ok(Page::new(content, total, &request))
    }
}
