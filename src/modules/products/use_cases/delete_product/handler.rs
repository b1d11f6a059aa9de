use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const OPERATION: &str = "delete_product";

pub struct DeleteProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Removes the record. Of two racing deletes, the one that finds nothing left reports
    /// NotFound.
    pub async fn handle(&self, id: Uuid) -> Result<(), ProductError> {
        let removed = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?;
        if !removed {
            return Err(ProductError::NotFound(id));
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
