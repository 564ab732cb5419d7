//! Orders domain module.
//!
//! This crate contains the business rules for adding items to an order,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod error;
pub mod item;
pub mod order;

pub use error::{InvalidItemError, OrderError};
pub use item::Item;
pub use order::{
    AddItem, ItemAdded, ItemQuantityIncreased, Order, OrderCommand, OrderEvent, OrderId,
};
