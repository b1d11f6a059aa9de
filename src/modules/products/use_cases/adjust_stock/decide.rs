// Decide function for stock adjustments.
//
// Purpose
// - Apply an increase or decrease to the record as it was just read.
//
// Boundaries
// - Pure. The handler calls it again with a fresh read on every retry, so the sufficiency
//   check always runs against the stock that will actually be overwritten.

use crate::modules::products::core::errors::ProductError;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::adjust_stock::command::StockAdjustment;

pub fn decide_adjustment(
    current: &Product,
    adjustment: StockAdjustment,
    now: i64,
) -> Result<Product, ProductError> {
    let stock_quantity = match adjustment {
        StockAdjustment::Increase(quantity) => current
            .stock_quantity
            .checked_add(quantity)
            .ok_or_else(|| {
                ProductError::InvalidArgument(format!(
                    "increasing stock of {} by {quantity} overflows",
                    current.name
                ))
            })?,
        StockAdjustment::Decrease(quantity) => {
            if current.stock_quantity < quantity {
                return Err(ProductError::InsufficientStock {
                    name: current.name.clone(),
                    available: current.stock_quantity,
                    requested: quantity,
                });
            }
            current.stock_quantity - quantity
        }
    };

    Ok(Product {
        stock_quantity,
        updated_at: now.max(current.created_at),
        ..current.clone()
    })
}
