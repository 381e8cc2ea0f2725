//! Integration tests for Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migrated schema matches the entity
//! - Overwrites update in place instead of inserting
//! - Paging and sorting happen in SQL with stable ordering
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_products::*;
use test_utils::{assertions::*, TestDatabase, TestDataBuilder};

fn input(builder: &TestDataBuilder, index: u64) -> SaveProduct {
    SaveProduct {
        id: None,
        name: builder.name("product", &index.to_string()),
        description: "Integration test product".to_string(),
        price: builder.price(index),
        quantity: builder.quantity(index),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let saved = assert_some(repo.save(input(&builder, 0)).await.unwrap(), "insert");
    assert_eq!(saved.name, builder.name("product", "0"));
    assert_f64_eq(saved.price, builder.price(0), "price");

    let found = assert_some(repo.find_by_id(saved.id).await.unwrap(), "stored row");
    assert_eq!(found, saved);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_existing_id_updates_in_place() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_in_place");

    let saved = assert_some(repo.save(input(&builder, 0)).await.unwrap(), "insert");

    let mut change = input(&builder, 1);
    change.id = Some(saved.id);
    let updated = assert_some(repo.save(change.clone()).await.unwrap(), "update");

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.name, change.name);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete");

    let saved = assert_some(repo.save(input(&builder, 0)).await.unwrap(), "insert");

    assert!(repo.delete(saved.id).await.unwrap());
    assert!(!repo.delete(saved.id).await.unwrap());
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_order");

    for i in 0..4 {
        repo.save(input(&builder, i)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_sorted_by(&all, |p| p.id, false, "id asc");
}

// ============================================================================
// Paging Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_page_metadata_and_offsets() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("page_offsets");

    for i in 0..5 {
        repo.save(input(&builder, i)).await.unwrap();
    }

    let first = repo
        .find_page(PageRequest::new(0, 2, "id", "asc").unwrap())
        .await
        .unwrap();
    assert_eq!(first.content.len(), 2);
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
    assert!(first.is_first());
    assert!(!first.is_last());

    let last = repo
        .find_page(PageRequest::new(2, 2, "id", "asc").unwrap())
        .await
        .unwrap();
    assert_eq!(last.content.len(), 1);
    assert!(last.is_last());

    let beyond = repo
        .find_page(PageRequest::new(7, 2, "id", "asc").unwrap())
        .await
        .unwrap();
    assert!(beyond.content.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_page_sorted_descending() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("page_desc");

    for i in 0..6 {
        repo.save(input(&builder, i)).await.unwrap();
    }

    let page = repo
        .find_page(PageRequest::new(0, 6, "quantity", "desc").unwrap())
        .await
        .unwrap();
    assert_sorted_by(&page.content, |p| p.quantity, true, "quantity desc");

    let page = repo
        .find_page(PageRequest::new(0, 6, "name", "asc").unwrap())
        .await
        .unwrap();
    assert_sorted_by(&page.content, |p| p.name.clone(), false, "name asc");
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_reports_missing_and_undeletable() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    assert!(matches!(
        service.get_product_by_id(99).await,
        Err(ProductError::NotFound(99))
    ));
    assert!(matches!(
        service.delete_product(99).await,
        Err(ProductError::NotDeleted(99))
    ));
}
