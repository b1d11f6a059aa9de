use crate::modules::products::adapters::outbound::product_store::{ProductStore, ProductStoreError};
use crate::modules::products::adapters::outbound::product_store_in_memory::InMemoryProductStore;
use crate::modules::products::core::product::{Product, ProductPageRequest};
use crate::shared::core::pagination::Page;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;
use uuid::Uuid;

/// Wraps the in-memory store and lets a simulated competing writer win the next
/// `conflicts` conditional saves. Before each of those saves the competitor moves the
/// record's stock by `competing_delta` directly on the inner store, so the wrapped save
/// then fails on the version check.
pub struct ConflictInjectingStore {
    inner: Arc<InMemoryProductStore>,
    conflicts_left: AtomicU32,
    competing_delta: i64,
    save_attempts: AtomicU64,
}

impl ConflictInjectingStore {
    pub fn new(inner: Arc<InMemoryProductStore>, conflicts: u32, competing_delta: i64) -> Self {
        Self {
            inner,
            conflicts_left: AtomicU32::new(conflicts),
            competing_delta,
            save_attempts: AtomicU64::new(0),
        }
    }

    pub fn save_attempts(&self) -> u64 {
        self.save_attempts.load(Ordering::SeqCst)
    }

    async fn compete(&self, id: Uuid) -> Result<(), ProductStoreError> {
        if let Some(current) = self.inner.find_by_id(id).await? {
            let version = current.version;
            let competing = Product {
                stock_quantity: current.stock_quantity + self.competing_delta,
                ..current
            };
            self.inner.save(competing, Some(version)).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductStore for ConflictInjectingStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductStoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductStoreError> {
        self.inner.find_by_name(name).await
    }

    async fn save(
        &self,
        product: Product,
        expected_version: Option<i64>,
    ) -> Result<Product, ProductStoreError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        let inject = expected_version.is_some()
            && self
                .conflicts_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
        if inject {
            self.compete(product.id).await?;
        }
        self.inner.save(product, expected_version).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProductStoreError> {
        self.inner.delete_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductStoreError> {
        self.inner.find_all().await
    }

    async fn find_page(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, ProductStoreError> {
        self.inner.find_page(request).await
    }
}

/// Wraps the in-memory store and holds the caller back after the next read or the next
/// committed save, so another operation can run in between the store call and whatever the
/// caller does with its result.
pub struct PausingStore {
    inner: Arc<InMemoryProductStore>,
    read_pause_ms: AtomicU64,
    commit_pause_ms: AtomicU64,
}

impl PausingStore {
    pub fn new(inner: Arc<InMemoryProductStore>) -> Self {
        Self {
            inner,
            read_pause_ms: AtomicU64::new(0),
            commit_pause_ms: AtomicU64::new(0),
        }
    }

    pub fn pause_after_next_read(&self, ms: u64) {
        self.read_pause_ms.store(ms, Ordering::SeqCst);
    }

    pub fn pause_after_next_commit(&self, ms: u64) {
        self.commit_pause_ms.store(ms, Ordering::SeqCst);
    }

    async fn pause(slot: &AtomicU64) {
        let ms = slot.swap(0, Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for PausingStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductStoreError> {
        let found = self.inner.find_by_id(id).await?;
        Self::pause(&self.read_pause_ms).await;
        Ok(found)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductStoreError> {
        self.inner.find_by_name(name).await
    }

    async fn save(
        &self,
        product: Product,
        expected_version: Option<i64>,
    ) -> Result<Product, ProductStoreError> {
        let saved = self.inner.save(product, expected_version).await?;
        Self::pause(&self.commit_pause_ms).await;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ProductStoreError> {
        self.inner.delete_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductStoreError> {
        self.inner.find_all().await
    }

    async fn find_page(
        &self,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, ProductStoreError> {
        self.inner.find_page(request).await
    }
}
