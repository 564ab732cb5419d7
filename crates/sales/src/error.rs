use thiserror::Error;

use ordercraft_core::DomainError;

use crate::order::OrderId;

/// An item was rejected by `Order::add_item`.
///
/// Always raised before the order is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidItemError {
    #[error("price must not be negative (got {price})")]
    NegativePrice { price: i64 },

    #[error("quantity must be positive (got {quantity})")]
    NonPositiveQuantity { quantity: i64 },

    /// Merging into an existing line would overflow its quantity.
    #[error("quantity overflow: cannot add {added} to existing quantity {existing}")]
    QuantityOverflow { existing: i64, added: i64 },
}

/// Command-level failure for the `Order` aggregate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error(transparent)]
    InvalidItem(#[from] InvalidItemError),

    #[error("order_id mismatch (expected {expected}, got {actual})")]
    OrderMismatch { expected: OrderId, actual: OrderId },
}

impl From<InvalidItemError> for DomainError {
    fn from(err: InvalidItemError) -> Self {
        DomainError::validation(err.to_string())
    }
}

impl From<OrderError> for DomainError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidItem(e) => e.into(),
            OrderError::OrderMismatch { .. } => DomainError::invariant(err.to_string()),
        }
    }
}
