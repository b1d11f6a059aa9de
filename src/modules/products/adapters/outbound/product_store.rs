// Product store port.
//
// Purpose
// - Describe the durable storage the products core needs, without implementing it.
//
// Contract
// - `save` with `expected_version = None` inserts a new record at version 0.
// - `save` with `Some(v)` replaces the record only if its stored version is still `v`,
//   and stores it at `v + 1`. Anything else is a VersionConflict.
// - `name` is unique across live records; a save that would break this is a UniqueViolation.
// - `delete_by_id` is unconditional and reports whether a record was removed.

use crate::modules::products::core::product::{Product, ProductPageRequest};
use crate::shared::core::pagination::Page;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductStoreError {
    #[error("version conflict on product {id}: expected {expected:?}, actual {actual:?}")]
    VersionConflict {
        id: Uuid,
        expected: Option<i64>,
        actual: Option<i64>,
    },

    #[error("unique constraint violated: name {name} is already taken")]
    UniqueViolation { name: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductStoreError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductStoreError>;
    async fn save(
        &self,
        product: Product,
        expected_version: Option<i64>,
    ) -> Result<Product, ProductStoreError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProductStoreError>;
    async fn find_all(&self) -> Result<Vec<Product>, ProductStoreError>;
    async fn find_page(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, ProductStoreError>;
}
