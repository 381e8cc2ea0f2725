use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, SaveProduct},
    pagination::{Page, PageRequest, ProductSortField, SortDirection},
    repository::ProductRepository,
};

/// `ProductRepository` backed by the `products` table.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn update(&self, id: i32, input: SaveProduct) -> ProductResult<Option<Product>> {
        let mut active_model: entity::ActiveModel = input.into();
        active_model.id = Set(id);

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(Some(model.into()))
            }
            // Row vanished between the lookup and the update
            Err(DbErr::RecordNotUpdated) => {
                tracing::warn!(product_id = id, "Product disappeared before update");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn save(&self, input: SaveProduct) -> ProductResult<Option<Product>> {
        if let Some(id) = input.id {
            if entity::Entity::find_by_id(id).one(&self.db).await?.is_some() {
                return self.update(id, input).await;
            }
        }

        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Inserted product");
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(result.rows_affected > 0)
    }

    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        let mut query = entity::Entity::find().order_by(
            entity::Column::from(request.sort_by),
            Order::from(request.direction),
        );
        if request.sort_by != ProductSortField::Id {
            query = query.order_by_asc(entity::Column::Id);
        }

        let paginator = query.paginate(&self.db, request.page_size);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(request.page_no).await?;

        Ok(Page::new(
            models.into_iter().map(Product::from).collect(),
            total,
            &request,
        ))
    }
}
