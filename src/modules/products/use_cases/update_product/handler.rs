// Update handler orchestrates a full-replacement write.
//
// Responsibilities
// - Load the current record and remember its version.
// - Reject a rename onto a name another product already uses.
// - Decide the replacement and save it conditioned on the remembered version.
//
// Conflicts
// - A version conflict is returned as ConcurrentConflict. It is never retried.

use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::modules::products::use_cases::update_product::decide::decide_update;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

const OPERATION: &str = "update_product";

pub struct UpdateProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateProductHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateProduct) -> Result<Product, ProductError> {
        let id = command.id;
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))?
            .ok_or(ProductError::NotFound(id))?;

        if existing.name != command.name {
            let taken = self
                .store
                .find_by_name(&command.name)
                .await
                .map_err(|e| ProductError::from_store(OPERATION, e))?;
            if taken.is_some_and(|other| other.id != id) {
                return Err(ProductError::DuplicateName(command.name));
            }
        }

        let replacement = decide_update(&existing, command, Utc::now().timestamp_millis())?;
        let saved = self
            .store
            .save(replacement, Some(existing.version))
            .await
            .map_err(|e| ProductError::from_store(OPERATION, e))
            .inspect_err(|e| {
                if e.is_conflict() {
                    warn!(product_id = %id, read_version = existing.version, "update lost a race, not retried");
                }
            })?;
        info!(product_id = %id, version = saved.version, "product updated");
        Ok(saved)
    }
}
