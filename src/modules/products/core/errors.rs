use crate::modules::products::adapters::outbound::product_store::ProductStoreError;
use crate::shared::core::pagination::PaginationError;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("product not found with id: {0}")]
    NotFound(Uuid),

    #[error("product with name {0} already exists")]
    DuplicateName(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("stock quantity cannot be negative, got {0}")]
    InvalidStock(i64),

    #[error("insufficient stock for product {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    #[error("product {0} was modified concurrently, please try again")]
    ConcurrentConflict(Uuid),

    #[error("storage fault: {0}")]
    StorageFault(String),
}

impl ProductError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ProductError::ConcurrentConflict(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProductError::NotFound(_) => "NotFound",
            ProductError::DuplicateName(_) => "DuplicateName",
            ProductError::InvalidArgument(_) => "InvalidArgument",
            ProductError::InvalidStock(_) => "InvalidStock",
            ProductError::InsufficientStock { .. } => "InsufficientStock",
            ProductError::ConcurrentConflict(_) => "ConcurrentConflict",
            ProductError::StorageFault(_) => "StorageFault",
        }
    }

    /// Classifies a store failure and logs the ones that point at the storage layer itself.
    pub fn from_store(operation: &'static str, error: ProductStoreError) -> Self {
        match &error {
            ProductStoreError::UniqueViolation { .. } => {
                error!(operation, error = %error, "store integrity violation")
            }
            ProductStoreError::Backend(_) => error!(operation, error = %error, "store failure"),
            ProductStoreError::VersionConflict { .. } => {}
        }
        error.into()
    }
}

impl From<ProductStoreError> for ProductError {
    fn from(error: ProductStoreError) -> Self {
        match error {
            ProductStoreError::VersionConflict { id, .. } => ProductError::ConcurrentConflict(id),
            ProductStoreError::UniqueViolation { name } => ProductError::DuplicateName(name),
            ProductStoreError::Backend(message) => ProductError::StorageFault(message),
        }
    }
}

impl From<PaginationError> for ProductError {
    fn from(error: PaginationError) -> Self {
        ProductError::InvalidArgument(error.to_string())
    }
}
