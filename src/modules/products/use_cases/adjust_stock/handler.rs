// Stock adjustment handler: increase and decrease under optimistic concurrency.
//
// Responsibilities
// - Reject non-positive quantities before touching the store.
// - Run read, decide and conditional save as one attempt.
// - Repeat the whole attempt on a version conflict, up to the retry policy's limit.
//
// Retry rules
// - Only ConcurrentConflict is retried. NotFound, InsufficientStock and storage faults end the
//   loop at once.
// - Every attempt re-reads the record, so a decrease is always checked against current stock.

use crate::modules::products::adapters::outbound::product_store::ProductStore;
use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::adjust_stock::command::AdjustStock;
use crate::modules::products::use_cases::adjust_stock::decide::decide_adjustment;
use crate::shared::core::retry::RetryPolicy;
use chrono::Utc;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span};

pub struct AdjustStockHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    retry: RetryPolicy,
}

impl<TStore> AdjustStockHandler<TStore>
where
    TStore: ProductStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    pub async fn handle(&self, command: AdjustStock) -> Result<Product, ProductError> {
        command.adjustment.validate()?;
        let operation = command.adjustment.operation_name();
        let span = info_span!("adjust_stock", operation, product_id = %command.id);

        let saved = self
            .retry
            .run(operation, ProductError::is_conflict, move |attempt| {
                self.attempt(command, attempt)
            })
            .instrument(span)
            .await?;
        info!(
            operation,
            product_id = %saved.id,
            quantity = command.adjustment.quantity(),
            stock_quantity = saved.stock_quantity,
            version = saved.version,
            "stock adjusted"
        );
        Ok(saved)
    }

    async fn attempt(&self, command: AdjustStock, attempt: u32) -> Result<Product, ProductError> {
        let operation = command.adjustment.operation_name();
        let current = self
            .store
            .find_by_id(command.id)
            .await
            .map_err(|e| ProductError::from_store(operation, e))?
            .ok_or(ProductError::NotFound(command.id))?;
        debug!(
            attempt,
            read_version = current.version,
            stock_quantity = current.stock_quantity,
            "attempting adjustment"
        );

        let next = decide_adjustment(&current, command.adjustment, Utc::now().timestamp_millis())?;
        self.store
            .save(next, Some(current.version))
            .await
            .map_err(|e| ProductError::from_store(operation, e))
    }
}
