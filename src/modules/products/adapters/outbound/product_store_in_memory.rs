// In memory implementation of the ProductStore port.
//
// Purpose
// - Back the service in local development and tests without a database.
//
// Responsibilities
// - Keep records in id order (UUID v7 ids, so creation order).
// - Check the expected version and the unique name inside one write critical section.
//
// Test switches
// - `toggle_offline` makes every call fail with a backend error.
// - `set_delay_save_ms` sleeps before a save takes the write lock, to widen race windows.

use crate::modules::products::adapters::outbound::product_store::{ProductStore, ProductStoreError};
use crate::modules::products::core::product::{Product, ProductPageRequest};
use crate::shared::core::pagination::Page;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryProductStore {
    rows: RwLock<BTreeMap<Uuid, Product>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), ProductStoreError> {
        if self.is_offline {
            return Err(ProductStoreError::Backend("Product store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductStoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn save(
        &self,
        product: Product,
        expected_version: Option<i64>,
    ) -> Result<Product, ProductStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut rows = self.rows.write().await;
        let actual = rows.get(&product.id).map(|p| p.version);
        let next_version = match (expected_version, actual) {
            (None, None) => 0,
            (Some(expected), Some(actual)) if expected == actual => actual + 1,
            (expected, actual) => {
                return Err(ProductStoreError::VersionConflict {
                    id: product.id,
                    expected,
                    actual,
                });
            }
        };
        if rows
            .values()
            .any(|other| other.id != product.id && other.name == product.name)
        {
            return Err(ProductStoreError::UniqueViolation { name: product.name });
        }

        let stored = Product {
            version: next_version,
            ..product
        };
        rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProductStoreError> {
        self.ensure_online()?;
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_page(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, ProductStoreError> {
        self.ensure_online()?;
        let mut items: Vec<Product> = self.rows.read().await.values().cloned().collect();
        if let Some(sort) = request.sort {
            items.sort_by(|a, b| {
                sort.direction
                    .apply(sort.property.compare(a, b))
                    .then_with(|| a.id.cmp(&b.id))
            });
        }
        Ok(Page::paginate(items, request.page, request.size))
    }
}
