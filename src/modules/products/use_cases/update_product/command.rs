use uuid::Uuid;

/// Full replacement of the editable fields. An omitted threshold resets it to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub low_stock_threshold: Option<i64>,
}
