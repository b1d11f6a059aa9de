// Create handler orchestrates the insert flow.
//
// Responsibilities
// - Decide the new record (validation, id, timestamps).
// - Reject a name that is already taken.
// - Insert; a racing create that slipped past the name check loses on the store's unique name.

use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::create_product::decide::decide_create;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const OPERATION: &str = "create_product";

pub struct CreateProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateProduct) -> Result<Product, ProductError> {
        let product = decide_create(command, Uuid::now_v7(), Utc::now().timestamp_millis())?;

        let taken = self
            .store
            .find_by_name(&product.name)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?;
        if taken.is_some() {
            return Err(ProductError::DuplicateName(product.name));
        }

        let saved = self
            .store
            .save(product, None)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?;
        info!(product_id = %saved.id, name = %saved.name, stock_quantity = saved.stock_quantity, "product created");
        Ok(saved)
    }
}
