use serde::{Deserialize, Serialize};

use ordercraft_products::ProductId;

use crate::error::InvalidItemError;

/// Order item: product, unit price, quantity.
///
/// Prices are fixed-point with two decimal places, stored as an integer count
/// of cents (`10.00` is `1000`); sub-cent amounts are not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    product: ProductId,
    /// Unit price in smallest currency unit (e.g., cents).
    price: i64,
    quantity: i64,
}

impl Item {
    /// Build an item. Nothing is validated here; `Order::add_item` does that.
    pub fn new(product: ProductId, price: i64, quantity: i64) -> Self {
        Self {
            product,
            price,
            quantity,
        }
    }

    pub fn product(&self) -> ProductId {
        self.product
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    /// Price and quantity checks applied before an item may enter an order.
    pub fn validate(&self) -> Result<(), InvalidItemError> {
        if self.price < 0 {
            return Err(InvalidItemError::NegativePrice { price: self.price });
        }
        if self.quantity <= 0 {
            return Err(InvalidItemError::NonPositiveQuantity {
                quantity: self.quantity,
            });
        }
        Ok(())
    }

    /// Two items merge into one line when both product and price match exactly.
    pub fn merges_with(&self, other: &Item) -> bool {
        self.product == other.product && self.price == other.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_valid() {
        assert_eq!(Item::new(ProductId::generate(), 0, 1).validate(), Ok(()));
    }

    #[test]
    fn negative_price_is_rejected_before_quantity() {
        let item = Item::new(ProductId::generate(), -1, 0);
        assert_eq!(
            item.validate(),
            Err(InvalidItemError::NegativePrice { price: -1 })
        );
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        for quantity in [0, -3] {
            let item = Item::new(ProductId::generate(), 1000, quantity);
            assert_eq!(
                item.validate(),
                Err(InvalidItemError::NonPositiveQuantity { quantity })
            );
        }
    }

    #[test]
    fn merges_only_on_same_product_and_price() {
        let p = ProductId::generate();
        let base = Item::new(p, 1000, 1);

        assert!(base.merges_with(&Item::new(p, 1000, 7)));
        assert!(!base.merges_with(&Item::new(p, 1500, 1)));
        assert!(!base.merges_with(&Item::new(ProductId::generate(), 1000, 1)));
    }

    #[test]
    fn set_quantity_updates_in_place() {
        let mut item = Item::new(ProductId::generate(), 1000, 1);
        item.set_quantity(4);
        assert_eq!(item.quantity(), 4);
    }

    #[test]
    fn json_field_names_are_stable() {
        let product = ProductId::generate();
        let json = serde_json::to_value(Item::new(product, 1000, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "product": product.to_string(),
                "price": 1000,
                "quantity": 2,
            })
        );
    }
}
