use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::{
    Product, resolve_low_stock_threshold, validate_name, validate_stock_quantity,
};
use crate::modules::products::use_cases::update_product::command::UpdateProduct;

/// Replaces every editable field of `existing`. Id, creation time and version are kept; the
/// store bumps the version on save.
pub fn decide_update(
    existing: &Product,
    command: UpdateProduct,
    now: i64,
) -> Result<Product, ProductError> {
    validate_name(&command.name)?;
    let low_stock_threshold = resolve_low_stock_threshold(command.low_stock_threshold)?;
    validate_stock_quantity(command.stock_quantity)?;

    Ok(Product {
        id: existing.id,
        name: command.name,
        description: command.description,
        stock_quantity: command.stock_quantity,
        low_stock_threshold,
        created_at: existing.created_at,
        updated_at: now.max(existing.created_at),
        version: existing.version,
    })
}
