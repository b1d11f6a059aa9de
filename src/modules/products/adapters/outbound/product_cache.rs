// Cache regions for product reads.
//
// Regions
// - by_id: product id -> ProductView. Filled on read, overwritten by update and stock changes,
//   buried on delete so a slower write-through cannot bring the product back. Create leaves it
//   alone.
// - pages: (page, size, sort) -> Page<ProductView>. Filled on read.
// - low_stock: one fixed key -> the whole low-stock listing. Filled on read.
//
// Invalidation
// - Every successful mutation clears `pages` and `low_stock` entirely.
// - Callers run these hooks before handing the mutation result back.

use crate::modules::products::core::product::{ProductPageRequest, ProductView};
use crate::shared::core::pagination::Page;
use crate::shared::infrastructure::cache::{CacheConfig, CacheConfigError, CacheStats, RegionCache};
use uuid::Uuid;

pub const LOW_STOCK_KEY: &str = "lowStock";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub page: u32,
    pub size: u32,
    pub sort: String,
}

impl PageKey {
    pub fn for_request(request: &ProductPageRequest) -> Self {
        Self {
            page: request.page,
            size: request.size,
            sort: request.sort_key(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductCacheStats {
    pub by_id: CacheStats,
    pub pages: CacheStats,
    pub low_stock: CacheStats,
}

pub struct ProductCache {
    by_id: RegionCache<Uuid, ProductView>,
    pages: RegionCache<PageKey, Page<ProductView>>,
    low_stock: RegionCache<&'static str, Vec<ProductView>>,
}

impl ProductCache {
    pub fn new(config: CacheConfig) -> Result<Self, CacheConfigError> {
        Ok(Self {
            by_id: RegionCache::new("productById", config)?,
            pages: RegionCache::new("productPages", config)?,
            low_stock: RegionCache::new("lowStockProducts", config)?,
        })
    }

    pub fn by_id(&self) -> &RegionCache<Uuid, ProductView> {
        &self.by_id
    }

    pub fn pages(&self) -> &RegionCache<PageKey, Page<ProductView>> {
        &self.pages
    }

    pub fn low_stock(&self) -> &RegionCache<&'static str, Vec<ProductView>> {
        &self.low_stock
    }

    pub fn evict_listings(&self) {
        self.pages.clear();
        self.low_stock.clear();
    }

    pub fn on_created(&self) {
        self.evict_listings();
    }

    /// Write-through for update and stock changes. A cached view with a higher version wins,
    /// so a slow writer cannot replace the result of a faster, later one.
    pub fn on_changed(&self, view: &ProductView) {
        self.by_id.put_unless(view.id, view.clone(), |cached| {
            cached.version > view.version
        });
        self.evict_listings();
    }

    pub fn on_deleted(&self, id: Uuid) {
        self.by_id.bury(id);
        self.evict_listings();
    }

    pub fn stats(&self) -> ProductCacheStats {
        ProductCacheStats {
            by_id: self.by_id.stats(),
            pages: self.pages.stats(),
            low_stock: self.low_stock.stats(),
        }
    }
}
