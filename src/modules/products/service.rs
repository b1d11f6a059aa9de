// Product service facade.
//
// Purpose
// - Bind the use case handlers and the cache regions into the eight public operations.
//
// Responsibilities
// - Reads go through the cache: hit, or load from the store and populate.
// - Mutations run their handler and, on success only, update the cache before returning.
// - Everything leaves the service as ProductView.
//
// Wiring
// - The cache and retry policy are injected by the composition root; nothing here is global.

use crate::modules::products::adapters::outbound::product_cache::{
    LOW_STOCK_KEY, PageKey, ProductCache, ProductCacheStats,
};
use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::{ProductPageRequest, ProductView};
use crate::modules::products::use_cases::adjust_stock::command::{AdjustStock, StockAdjustment};
use crate::modules::products::use_cases::adjust_stock::handler::AdjustStockHandler;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::get_product::handler::GetProductHandler;
use crate::modules::products::use_cases::list_low_stock_products::handler::ListLowStockProductsHandler;
use crate::modules::products::use_cases::list_products::handler::ListProductsHandler;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::modules::products::use_cases::update_product::handler::UpdateProductHandler;
use crate::shared::core::pagination::Page;
use crate::shared::core::retry::RetryPolicy;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProductService<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    cache: Arc<ProductCache>,
    create_handler: CreateProductHandler<TStore>,
    update_handler: UpdateProductHandler<TStore>,
    adjust_stock_handler: AdjustStockHandler<TStore>,
    delete_handler: DeleteProductHandler<TStore>,
    get_handler: GetProductHandler<TStore>,
    list_handler: ListProductsHandler<TStore>,
    low_stock_handler: ListLowStockProductsHandler<TStore>,
}

impl<TStore> ProductService<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, cache: Arc<ProductCache>, retry: RetryPolicy) -> Self {
        Self {
            cache,
            create_handler: CreateProductHandler::new(store.clone()),
            update_handler: UpdateProductHandler::new(store.clone()),
            adjust_stock_handler: AdjustStockHandler::new(store.clone(), retry),
            delete_handler: DeleteProductHandler::new(store.clone()),
            get_handler: GetProductHandler::new(store.clone()),
            list_handler: ListProductsHandler::new(store.clone()),
            low_stock_handler: ListLowStockProductsHandler::new(store),
        }
    }

    pub async fn create_product(&self, command: CreateProduct) -> Result<ProductView, ProductError> {
        let view = ProductView::from(self.create_handler.handle(command).await?);
        self.cache.on_created();
        Ok(view)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductView, ProductError> {
        self.cache
            .by_id()
            .get_or_load(id, || async {
                self.get_handler.handle(id).await.map(ProductView::from)
            })
            .await
    }

    pub async fn list_products(
        &self,
        request: ProductPageRequest,
    ) -> Result<Page<ProductView>, ProductError> {
        self.cache
            .pages()
            .get_or_load(PageKey::for_request(&request), || async {
                let page = self.list_handler.handle(&request).await?;
                Ok(page.map(ProductView::from))
            })
            .await
    }

    pub async fn list_low_stock_products(&self) -> Result<Vec<ProductView>, ProductError> {
        self.cache
            .low_stock()
            .get_or_load(LOW_STOCK_KEY, || async {
                let products = self.low_stock_handler.handle().await?;
                Ok(products.into_iter().map(ProductView::from).collect())
            })
            .await
    }

    pub async fn update_product(&self, command: UpdateProduct) -> Result<ProductView, ProductError> {
        let view = ProductView::from(self.update_handler.handle(command).await?);
        self.cache.on_changed(&view);
        Ok(view)
    }

    pub async fn increase_stock(&self, id: Uuid, quantity: i64) -> Result<ProductView, ProductError> {
        self.adjust_stock(AdjustStock {
            id,
            adjustment: StockAdjustment::Increase(quantity),
        })
        .await
    }

    pub async fn decrease_stock(&self, id: Uuid, quantity: i64) -> Result<ProductView, ProductError> {
        self.adjust_stock(AdjustStock {
            id,
            adjustment: StockAdjustment::Decrease(quantity),
        })
        .await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), ProductError> {
        self.delete_handler.handle(id).await?;
        self.cache.on_deleted(id);
        Ok(())
    }

    pub fn cache_stats(&self) -> ProductCacheStats {
        self.cache.stats()
    }

    async fn adjust_stock(&self, command: AdjustStock) -> Result<ProductView, ProductError> {
        let view = ProductView::from(self.adjust_stock_handler.handle(command).await?);
        self.cache.on_changed(&view);
        Ok(view)
    }
}
