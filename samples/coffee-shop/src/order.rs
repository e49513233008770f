//! Orders, receipts, and item descriptions.
//!
//! A [`CoffeeShopOrder`] holds its items in an
//! [`ImmutableList`](richly::container::ImmutableList), and all of the
//! presentation logic is expressed through the rich container operations:
//! food is selected with `flat_map`, priced with `fold_left`, and rendered
//! with `map`.

use rust_decimal::Decimal;
use thiserror::Error;

use richly::container::{ImmutableList, IndexOutOfRange, RichContainer, RichSequence};
use richly::typeclass::Foldable;

use crate::menu::{BakeryItem, CoffeeDrink, Tea};

/// A single line item of an order.
///
/// Food, coffee, and tea arrive through different hierarchies, so the order
/// keeps them as separate arms rather than forcing tea into the coffee set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderItem {
    /// Something from the bakery case.
    Food(BakeryItem),
    /// An espresso-based drink.
    Coffee(CoffeeDrink),
    /// A brewed tea.
    Tea(Tea),
}

/// Errors raised when working with an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// An item was requested at a position the order does not have.
    #[error("no such order item: {0}")]
    ItemOutOfRange(#[from] IndexOutOfRange),
}

/// A customer's order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoffeeShopOrder {
    customer_name: String,
    items: ImmutableList<OrderItem>,
}

impl CoffeeShopOrder {
    /// Creates an order for the given customer.
    #[must_use]
    pub fn new(customer_name: impl Into<String>, items: ImmutableList<OrderItem>) -> Self {
        Self {
            customer_name: customer_name.into(),
            items,
        }
    }

    /// Returns the customer the order belongs to.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the order's items.
    #[must_use]
    pub const fn items(&self) -> &ImmutableList<OrderItem> {
        &self.items
    }

    /// Returns the item at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::ItemOutOfRange`] when `index` is not within
    /// the order.
    pub fn item_at(&self, index: usize) -> Result<&OrderItem, OrderError> {
        Ok(self.items.at(index)?)
    }

    /// Returns the bakery items of the order, in order.
    fn food_items(&self) -> ImmutableList<BakeryItem> {
        self.items.clone().flat_map(|item| match item {
            OrderItem::Food(food) => Some(food),
            OrderItem::Coffee(_) | OrderItem::Tea(_) => None,
        })
    }

    /// Generates the receipt for the order's food items.
    ///
    /// One line per bakery item followed by a total, e.g.:
    ///
    /// ```text
    /// Donut: Glazed $1.75
    /// Cookie: Chocolate Chip $2.25
    /// Total: $4.00
    /// ```
    ///
    /// Beverages do not appear on the food receipt.
    #[must_use]
    pub fn food_receipt(&self) -> String {
        let food = self.food_items();
        tracing::debug!(
            customer = %self.customer_name,
            food_items = food.len(),
            "generating food receipt"
        );

        let total = food
            .clone()
            .fold_left(Decimal::ZERO, |sum, item| sum + item.price());
        let lines = food.fold_left(String::new(), |mut receipt, item| {
            receipt.push_str(&item.receipt_line());
            receipt.push('\n');
            receipt
        });

        format!("{lines}Total: ${total}")
    }

    /// Returns the customer-facing descriptions of the order's food items.
    ///
    /// Beverages are not included.
    #[must_use]
    pub fn food_descriptions(&self) -> ImmutableList<String> {
        self.food_items().map(|item| item.description())
    }

    /// Returns the customer-facing descriptions of the order's drinks,
    /// coffee and tea alike. Food is not included.
    #[must_use]
    pub fn drink_descriptions(&self) -> ImmutableList<String> {
        self.items.clone().flat_map(|item| match item {
            OrderItem::Coffee(coffee) => Some(coffee.description()),
            OrderItem::Tea(tea) => Some(tea.description()),
            OrderItem::Food(_) => None,
        })
    }
}
