//! Page requests and page results for product listings.
//!
//! Pages are zero-based. A page result derives its metadata from the total
//! row count at query time:
//!
//! - `total_pages = ceil(total_elements / page_size)`
//! - `is_first = page_no == 0`
//! - `is_last = page_no + 1 >= total_pages`
//!
//! so an empty store yields zero pages that are both first and last.

use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

use crate::error::{ProductError, ProductResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` in any case is ascending; anything else is descending.
    pub fn from_str_lenient(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Product properties a page can be sorted by. Names are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    #[default]
    Id,
    Name,
    Description,
    Price,
    Quantity,
}

/// A validated request for one page of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: u64,
    pub page_size: u64,
    pub sort_by: ProductSortField,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn new(page_no: i32, page_size: i32, sort_by: &str, sort_dir: &str) -> ProductResult<Self> {
        if page_no < 0 {
            return Err(ProductError::Validation(
                "Page index must not be less than zero".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(ProductError::Validation(
                "Page size must not be less than one".to_string(),
            ));
        }

        let sort_by = ProductSortField::from_str(sort_by)
            .map_err(|_| ProductError::InvalidSortField(sort_by.to_string()))?;

        Ok(Self {
            page_no: page_no as u64,
            page_size: page_size as u64,
            sort_by,
            direction: SortDirection::from_str_lenient(sort_dir),
        })
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        self.page_no.saturating_mul(self.page_size)
    }
}

/// One page of results plus the total row count it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page_no: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page_no: request.page_no,
            page_size: request.page_size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.page_size.max(1))
    }

    pub fn is_first(&self) -> bool {
        self.page_no == 0
    }

    pub fn is_last(&self) -> bool {
        self.page_no + 1 >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page_no: self.page_no,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page_no: i32, page_size: i32) -> PageRequest {
        PageRequest::new(page_no, page_size, "id", "asc").unwrap()
    }

    #[test]
    fn test_sort_direction_is_lenient() {
        assert_eq!(SortDirection::from_str_lenient("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_str_lenient("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::from_str_lenient("Asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_str_lenient("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_str_lenient("up"), SortDirection::Desc);
        assert_eq!(SortDirection::from_str_lenient(""), SortDirection::Desc);
    }

    #[test]
    fn test_sort_field_names() {
        assert_eq!(
            ProductSortField::from_str("quantity").unwrap(),
            ProductSortField::Quantity
        );
        assert_eq!(ProductSortField::Price.as_ref(), "price");
        assert!(ProductSortField::from_str("Name").is_err());
    }

    #[test]
    fn test_page_request_rejects_negative_page() {
        let err = PageRequest::new(-1, 2, "id", "asc").unwrap_err();
        assert_eq!(err.to_string(), "Page index must not be less than zero");
    }

    #[test]
    fn test_page_request_rejects_zero_size() {
        let err = PageRequest::new(0, 0, "id", "asc").unwrap_err();
        assert_eq!(err.to_string(), "Page size must not be less than one");
    }

    #[test]
    fn test_page_request_rejects_unknown_field() {
        let err = PageRequest::new(0, 2, "colour", "asc").unwrap_err();
        assert!(matches!(err, ProductError::InvalidSortField(ref f) if f == "colour"));
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(request(2, 5).offset(), 10);
    }

    #[test]
    fn test_page_metadata_first_page() {
        let page = Page::new(vec![1, 2], 5, &request(0, 2));
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert!(!page.is_last());
    }

    #[test]
    fn test_page_metadata_last_page() {
        let page = Page::new(vec![5], 5, &request(2, 2));
        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn test_page_metadata_empty_store() {
        let page: Page<i32> = Page::new(vec![], 0, &request(0, 2));
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn test_page_metadata_beyond_last_page() {
        let page: Page<i32> = Page::new(vec![], 5, &request(7, 2));
        assert!(page.content.is_empty());
        assert!(page.is_last());
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 4, &request(1, 2)).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.page_no, 1);
    }
}
