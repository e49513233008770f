//! Bakery items as a closed sum type.
//!
//! `BakeryItem` is the complete set of food the shop sells. Every function
//! matching on it is exhaustive over {Donut, Bagel, Cookie}, so adding a
//! variant forces every call site to handle it.

use std::fmt;

use rust_decimal::Decimal;

/// The kinds of donut on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonutType {
    /// Classic glazed.
    Glazed,
    /// Chocolate frosted.
    Chocolate,
    /// Jelly filled.
    Jelly,
}

impl fmt::Display for DonutType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Glazed => "Glazed",
            Self::Chocolate => "Chocolate",
            Self::Jelly => "Jelly",
        };
        formatter.write_str(label)
    }
}

/// The kinds of bagel on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BagelType {
    /// Plain.
    Plain,
    /// Everything seasoning.
    Everything,
    /// Sesame.
    Sesame,
}

impl fmt::Display for BagelType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Plain => "Plain",
            Self::Everything => "Everything",
            Self::Sesame => "Sesame",
        };
        formatter.write_str(label)
    }
}

/// Spreads available for bagels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpreadType {
    /// Plain cream cheese.
    CreamCheese,
    /// Herb cream cheese.
    HerbCreamCheese,
    /// Butter.
    Butter,
    /// Strawberry jam.
    Jam,
}

impl fmt::Display for SpreadType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CreamCheese => "Cream Cheese",
            Self::HerbCreamCheese => "Herb Cream Cheese",
            Self::Butter => "Butter",
            Self::Jam => "Jam",
        };
        formatter.write_str(label)
    }
}

/// The kinds of cookie on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CookieType {
    /// Chocolate chip.
    ChocolateChip,
    /// Oatmeal raisin.
    OatmealRaisin,
    /// Sugar.
    Sugar,
}

impl fmt::Display for CookieType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ChocolateChip => "Chocolate Chip",
            Self::OatmealRaisin => "Oatmeal Raisin",
            Self::Sugar => "Sugar",
        };
        formatter.write_str(label)
    }
}

/// A food item from the bakery case.
///
/// This is a closed hierarchy: the shop sells donuts, bagels, and cookies,
/// and nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BakeryItem {
    /// A donut.
    Donut {
        /// The kind of donut.
        donut_type: DonutType,
    },
    /// A bagel with a spread.
    Bagel {
        /// The kind of bagel.
        bagel_type: BagelType,
        /// The spread served with it.
        spread: SpreadType,
        /// Whether the bagel is toasted.
        toasted: bool,
    },
    /// A cookie.
    Cookie {
        /// The kind of cookie.
        cookie_type: CookieType,
        /// Whether the cookie is served warm.
        warmed: bool,
    },
}

impl BakeryItem {
    /// Returns the price of the item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffee_shop_sample::menu::{BakeryItem, DonutType};
    /// use rust_decimal::Decimal;
    ///
    /// let donut = BakeryItem::Donut {
    ///     donut_type: DonutType::Glazed,
    /// };
    /// assert_eq!(donut.price(), Decimal::new(175, 2));
    /// ```
    #[must_use]
    pub const fn price(&self) -> Decimal {
        match self {
            Self::Donut { .. } => Decimal::from_parts(175, 0, 0, false, 2),
            Self::Bagel { .. } => Decimal::from_parts(250, 0, 0, false, 2),
            Self::Cookie { .. } => Decimal::from_parts(225, 0, 0, false, 2),
        }
    }

    /// Returns the receipt line for the item, e.g. `Donut: Glazed $1.75`.
    #[must_use]
    pub fn receipt_line(&self) -> String {
        match self {
            Self::Donut { donut_type } => {
                format!("Donut: {donut_type} ${}", self.price())
            }
            Self::Bagel { bagel_type, .. } => {
                format!("Bagel: {bagel_type} ${}", self.price())
            }
            Self::Cookie { cookie_type, .. } => {
                format!("Cookie: {cookie_type} ${}", self.price())
            }
        }
    }

    /// Returns the customer-facing description of the item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffee_shop_sample::menu::{BagelType, BakeryItem, SpreadType};
    ///
    /// let bagel = BakeryItem::Bagel {
    ///     bagel_type: BagelType::Plain,
    ///     spread: SpreadType::HerbCreamCheese,
    ///     toasted: true,
    /// };
    /// assert_eq!(bagel.description(), "Plain bagel with Herb Cream Cheese");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Donut { donut_type } => format!("{donut_type} donut"),
            Self::Bagel {
                bagel_type, spread, ..
            } => format!("{bagel_type} bagel with {spread}"),
            Self::Cookie { cookie_type, .. } => format!("{cookie_type} cookie"),
        }
    }
}

impl fmt::Display for BakeryItem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description())
    }
}
