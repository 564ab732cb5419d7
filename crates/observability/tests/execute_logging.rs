//! Commands run through the traced execution path with a live subscriber.

use chrono::Utc;

use ordercraft_core::{AggregateRoot, DomainError, execute};
use ordercraft_products::ProductId;
use ordercraft_sales::{AddItem, Item, Order, OrderCommand};

fn add(order: &Order, item: Item) -> OrderCommand {
    OrderCommand::AddItem(AddItem {
        order_id: order.id_typed(),
        item,
        occurred_at: Utc::now(),
    })
}

#[test]
fn traced_execution_applies_and_rejects() {
    ordercraft_observability::tracing::init_with_default("trace");

    let mut order = Order::new();
    let product = ProductId::generate();

    let cmd = add(&order, Item::new(product, 1000, 1));
    execute(&mut order, &cmd).unwrap();
    let cmd = add(&order, Item::new(product, 1000, 3));
    execute(&mut order, &cmd).unwrap();

    let cmd = add(&order, Item::new(product, -5, 1));
    let err: DomainError = execute(&mut order, &cmd).unwrap_err().into();
    assert!(err.is_validation());

    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].quantity(), 4);
    assert_eq!(order.version(), 2);
}
