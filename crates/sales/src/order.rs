use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordercraft_core::{Aggregate, AggregateId, AggregateRoot};
use ordercraft_events::Event;
use ordercraft_products::ProductId;

use crate::error::{InvalidItemError, OrderError};
use crate::item::Item;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub AggregateId);

impl OrderId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Order.
///
/// Holds items in insertion order. No two items ever share both product and
/// price; such additions are merged into the existing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    items: Vec<Item>,
    version: u64,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    /// Create an empty order with a fresh identifier.
    pub fn new() -> Self {
        Self::with_id(OrderId::generate())
    }

    pub fn with_id(id: OrderId) -> Self {
        Self {
            id,
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    /// Current items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line holding `product` at exactly `price`, if any.
    pub fn find_item(&self, product: ProductId, price: i64) -> Option<&Item> {
        self.items
            .iter()
            .find(|i| i.product() == product && i.price() == price)
    }

    /// Validate `item`, then merge it into a matching line or append it.
    ///
    /// Stamps the resulting event with the wall clock; use [`Order::add_item_at`]
    /// when the business time comes from the caller. On error the order is left
    /// exactly as it was.
    pub fn add_item(&mut self, item: Item) -> Result<(), InvalidItemError> {
        self.add_item_at(item, Utc::now())
    }

    /// Same as [`Order::add_item`] with an explicit business time.
    pub fn add_item_at(
        &mut self,
        item: Item,
        occurred_at: DateTime<Utc>,
    ) -> Result<(), InvalidItemError> {
        let event = self.decide_add_item(item, occurred_at)?;
        self.apply(&event);
        Ok(())
    }

    /// Whether `event` can be applied to the current state.
    fn accepts(&self, event: &OrderEvent) -> bool {
        match event {
            OrderEvent::ItemAdded(e) => {
                e.order_id == self.id && e.line_no == line_no(self.items.len())
            }
            OrderEvent::ItemQuantityIncreased(e) => {
                e.order_id == self.id
                    && e.line_no != 0
                    && (e.line_no as usize) <= self.items.len()
            }
        }
    }

    fn decide_add_item(
        &self,
        item: Item,
        occurred_at: DateTime<Utc>,
    ) -> Result<OrderEvent, InvalidItemError> {
        item.validate()?;

        let existing = self
            .items
            .iter()
            .enumerate()
            .find(|(_, existing)| existing.merges_with(&item));

        if let Some((idx, existing)) = existing {
            let new_quantity = existing
                .quantity()
                .checked_add(item.quantity())
                .ok_or(InvalidItemError::QuantityOverflow {
                    existing: existing.quantity(),
                    added: item.quantity(),
                })?;

            return Ok(OrderEvent::ItemQuantityIncreased(ItemQuantityIncreased {
                order_id: self.id,
                line_no: line_no(idx),
                added: item.quantity(),
                new_quantity,
                occurred_at,
            }));
        }

        Ok(OrderEvent::ItemAdded(ItemAdded {
            order_id: self.id,
            line_no: line_no(self.items.len()),
            item,
            occurred_at,
        }))
    }
}

/// 1-based line number for a 0-based index.
fn line_no(idx: usize) -> u32 {
    u32::try_from(idx).map_or(u32::MAX, |n| n.saturating_add(1))
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub order_id: OrderId,
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    AddItem(AddItem),
}

/// Event: ItemAdded (a new line was appended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub order_id: OrderId,
    pub line_no: u32,
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemQuantityIncreased (merged into an existing line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuantityIncreased {
    pub order_id: OrderId,
    pub line_no: u32,
    pub added: i64,
    pub new_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    ItemAdded(ItemAdded),
    ItemQuantityIncreased(ItemQuantityIncreased),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::ItemAdded(_) => "sales.order.item_added",
            OrderEvent::ItemQuantityIncreased(_) => "sales.order.item_quantity_increased",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::ItemAdded(e) => e.occurred_at,
            OrderEvent::ItemQuantityIncreased(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = OrderError;

    /// Events for another order, or pointing at a line that does not fit the
    /// current item list, are ignored and do not count towards the version.
    fn apply(&mut self, event: &Self::Event) {
        if !self.accepts(event) {
            return;
        }

        match event {
            OrderEvent::ItemAdded(e) => {
                self.items.push(e.item.clone());
            }
            OrderEvent::ItemQuantityIncreased(e) => {
                // `accepts` guarantees 1 <= line_no <= len.
                if let Some(item) = self.items.get_mut(e.line_no as usize - 1) {
                    item.set_quantity(e.new_quantity);
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::AddItem(cmd) => {
                if cmd.order_id != self.id {
                    return Err(OrderError::OrderMismatch {
                        expected: self.id,
                        actual: cmd.order_id,
                    });
                }
                let event = self.decide_add_item(cmd.item.clone(), cmd.occurred_at)?;
                Ok(vec![event])
            }
        }
    }
}
