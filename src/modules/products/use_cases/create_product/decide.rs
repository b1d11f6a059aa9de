// Decide function for product creation.
//
// Purpose
// - Validate the command and build the record to insert.
//
// Boundaries
// - Pure. The id and the clock reading are passed in; name uniqueness is checked by the handler
//   and enforced again by the store.

use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::{
    Product, resolve_low_stock_threshold, validate_name, validate_stock_quantity,
};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use uuid::Uuid;

pub fn decide_create(command: CreateProduct, id: Uuid, now: i64) -> Result<Product, ProductError> {
    validate_name(&command.name)?;
    let low_stock_threshold = resolve_low_stock_threshold(command.low_stock_threshold)?;
    validate_stock_quantity(command.stock_quantity)?;

    Ok(Product {
        id,
        name: command.name,
        description: command.description,
        stock_quantity: command.stock_quantity,
        low_stock_threshold,
        created_at: now,
        updated_at: now,
        version: 0,
    })
}
