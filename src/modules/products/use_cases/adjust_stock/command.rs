use crate::modules::products::core::errors::ProductError;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Increase(i64),
    Decrease(i64),
}

impl StockAdjustment {
    pub fn quantity(&self) -> i64 {
        match self {
            StockAdjustment::Increase(q) | StockAdjustment::Decrease(q) => *q,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            StockAdjustment::Increase(_) => "increase_stock",
            StockAdjustment::Decrease(_) => "decrease_stock",
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        let quantity = self.quantity();
        if quantity <= 0 {
            return Err(ProductError::InvalidArgument(format!(
                "quantity must be positive, got {quantity}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustStock {
    pub id: Uuid,
    pub adjustment: StockAdjustment,
}
