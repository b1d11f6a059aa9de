// Product is the single entity kept by this service.
//
// Notes
// - Timestamps are epoch milliseconds (UTC), like every i64 time value in this crate.
// - `version` is owned by the store: 0 on insert, +1 on every successful write.
// - ProductView is what leaves the service; it serializes with camelCase keys.

use crate::modules::products::core::errors::ProductError;
use crate::shared::core::pagination::PageRequest;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

impl Product {
    /// Inclusive: a product sitting exactly on its threshold is low on stock.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.low_stock_threshold
    }
}

pub fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::InvalidArgument(
            "product name is mandatory".to_string(),
        ));
    }
    Ok(())
}

/// An omitted threshold means 0.
pub fn resolve_low_stock_threshold(threshold: Option<i64>) -> Result<i64, ProductError> {
    match threshold.unwrap_or(0) {
        t if t < 0 => Err(ProductError::InvalidArgument(format!(
            "low stock threshold must be non-negative, got {t}"
        ))),
        t => Ok(t),
    }
}

pub fn validate_stock_quantity(stock_quantity: i64) -> Result<(), ProductError> {
    if stock_quantity < 0 {
        return Err(ProductError::InvalidStock(stock_quantity));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub low_stock_threshold: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            stock_quantity: p.stock_quantity,
            low_stock_threshold: p.low_stock_threshold,
            created_at: p.created_at,
            updated_at: p.updated_at,
            version: p.version,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSortProperty {
    Name,
    StockQuantity,
    LowStockThreshold,
    CreatedAt,
    UpdatedAt,
}

impl ProductSortProperty {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSortProperty::Name => a.name.cmp(&b.name),
            ProductSortProperty::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
            ProductSortProperty::LowStockThreshold => {
                a.low_stock_threshold.cmp(&b.low_stock_threshold)
            }
            ProductSortProperty::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSortProperty::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl FromStr for ProductSortProperty {
    type Err = ProductError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "name" => Ok(ProductSortProperty::Name),
            "stockQuantity" => Ok(ProductSortProperty::StockQuantity),
            "lowStockThreshold" => Ok(ProductSortProperty::LowStockThreshold),
            "createdAt" => Ok(ProductSortProperty::CreatedAt),
            "updatedAt" => Ok(ProductSortProperty::UpdatedAt),
            other => Err(ProductError::InvalidArgument(format!(
                "cannot sort products by {other}"
            ))),
        }
    }
}

impl fmt::Display for ProductSortProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductSortProperty::Name => "name",
            ProductSortProperty::StockQuantity => "stockQuantity",
            ProductSortProperty::LowStockThreshold => "lowStockThreshold",
            ProductSortProperty::CreatedAt => "createdAt",
            ProductSortProperty::UpdatedAt => "updatedAt",
        };
        f.write_str(name)
    }
}

pub type ProductPageRequest = PageRequest<ProductSortProperty>;
