use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use std::sync::Arc;
use uuid::Uuid;

const OPERATION: &str = "get_product";

pub struct GetProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: Uuid) -> Result<Product, ProductError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?
            .ok_or(ProductError::NotFound(id))
    }
}
