use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Product, SaveProduct};
use crate::pagination::ProductSortField;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

// The id is left unset so Postgres assigns it
impl From<SaveProduct> for ActiveModel {
    fn from(input: SaveProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            quantity: Set(input.quantity),
        }
    }
}

impl From<ProductSortField> for Column {
    fn from(field: ProductSortField) -> Self {
        match field {
            ProductSortField::Id => Column::Id,
            ProductSortField::Name => Column::Name,
            ProductSortField::Description => Column::Description,
            ProductSortField::Price => Column::Price,
            ProductSortField::Quantity => Column::Quantity,
        }
    }
}
