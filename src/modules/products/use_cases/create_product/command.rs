#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub low_stock_threshold: Option<i64>,
}
