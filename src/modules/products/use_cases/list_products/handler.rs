use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::{Product, ProductPageRequest};
use crate::shared::core::pagination::Page;
use std::sync::Arc;

const OPERATION: &str = "list_products";

pub struct ListProductsHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListProductsHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: &ProductPageRequest) -> Result<Page<Product>, ProductError> {
        self.store
            .find_page(request)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))
    }
}
