use crate::modules::products::adapters::outbound::product_cache::ProductCache;
use crate::modules::products::adapters::outbound::product_store_in_memory::InMemoryProductStore;
use crate::modules::products::service::ProductService;
use crate::shared::core::retry::RetryPolicy;
use crate::shared::infrastructure::cache::{CacheConfig, CacheConfigError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService<InMemoryProductStore>>,
}

impl AppState {
    pub fn with_store(
        store: Arc<InMemoryProductStore>,
        cache: CacheConfig,
        retry: RetryPolicy,
    ) -> Result<Self, CacheConfigError> {
        let cache = Arc::new(ProductCache::new(cache)?);
        Ok(Self {
            products: Arc::new(ProductService::new(store, cache, retry)),
        })
    }

    pub fn in_memory(cache: CacheConfig, retry: RetryPolicy) -> Result<Self, CacheConfigError> {
        Self::with_store(Arc::new(InMemoryProductStore::new()), cache, retry)
    }
}
