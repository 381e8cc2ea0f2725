use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::pagination::Page;

/// A stored product row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// Product as it travels over HTTP.
///
/// Omit `id` to insert; supply it to overwrite an existing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Keyboard")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Mechanical, 87 keys")]
    pub description: String,
    #[serde(default)]
    #[schema(example = 49.9)]
    pub price: f64,
    #[serde(default)]
    #[schema(example = 10)]
    pub quantity: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("name must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Repository input for an insert (`id: None`) or an overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveProduct {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl SaveProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<ProductDto> for SaveProduct {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// One page of products with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub products: Vec<ProductDto>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub is_first: bool,
    pub is_last: bool,
    pub page_no: u64,
    pub page_size: u64,
}

impl From<Page<Product>> for ProductResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let is_first = page.is_first();
        let is_last = page.is_last();
        let page = page.map(ProductDto::from);

        Self {
            products: page.content,
            total_elements: page.total_elements,
            total_pages,
            is_first,
            is_last,
            page_no: page.page_no,
            page_size: page.page_size,
        }
    }
}

fn default_page_size() -> i32 {
    2
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_dir() -> String {
    "asc".to_string()
}

/// Query parameters of `GET /page-products`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub page_no: i32,
    /// Rows per page
    #[serde(default = "default_page_size")]
    #[param(default = 2, minimum = 1)]
    pub page_size: i32,
    /// One of `id`, `name`, `description`, `price`, `quantity`
    #[serde(default = "default_sort_by")]
    #[param(default = "id")]
    pub sort_by: String,
    /// `asc` (any case) sorts ascending; any other value sorts descending
    #[serde(default = "default_sort_dir")]
    #[param(default = "asc")]
    pub sort_dir: String,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: default_page_size(),
            sort_by: default_sort_by(),
            sort_dir: default_sort_dir(),
        }
    }
}
