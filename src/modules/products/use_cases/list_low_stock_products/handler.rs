use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use std::sync::Arc;

const OPERATION: &str = "list_low_stock_products";

pub struct ListLowStockProductsHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListLowStockProductsHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Every product whose stock sits at or below its threshold, in store order.
    pub async fn handle(&self) -> Result<Vec<Product>, ProductError> {
        let products = self
            .store
            .find_all()
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?;
        Ok(products.into_iter().filter(Product::is_low_stock).collect())
    }
}
