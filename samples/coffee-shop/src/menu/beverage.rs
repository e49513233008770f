//! Coffee drinks as a closed sum type, with tea deliberately outside it.
//!
//! `CoffeeDrink` is the complete set of espresso-based drinks the shop
//! prepares. [`Tea`] is not a `CoffeeDrink` variant: it is brewed, not
//! pulled, and keeping it outside the hierarchy keeps coffee-only matches
//! exhaustive over exactly {Americano, Latte, Macchiato}.

use std::fmt;

/// Serving temperature for a drink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrinkTemperature {
    /// Served hot.
    Hot,
    /// Served over ice.
    Iced,
}

impl fmt::Display for DrinkTemperature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hot => "Hot",
            Self::Iced => "Iced",
        };
        formatter.write_str(label)
    }
}

/// Flavor syrups available for espresso drinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlavorSyrup {
    /// Caramel.
    Caramel,
    /// Vanilla.
    Vanilla,
    /// Hazelnut.
    Hazelnut,
}

impl fmt::Display for FlavorSyrup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Caramel => "Caramel",
            Self::Vanilla => "Vanilla",
            Self::Hazelnut => "Hazelnut",
        };
        formatter.write_str(label)
    }
}

/// Milks available for espresso drinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilkType {
    /// Whole milk.
    WholeMilk,
    /// Skim milk.
    SkimMilk,
    /// Almond milk.
    AlmondMilk,
    /// Oat milk.
    OatMilk,
}

impl fmt::Display for MilkType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WholeMilk => "Whole Milk",
            Self::SkimMilk => "Skim Milk",
            Self::AlmondMilk => "Almond Milk",
            Self::OatMilk => "Oat Milk",
        };
        formatter.write_str(label)
    }
}

/// An espresso-based drink.
///
/// This is a closed hierarchy: the espresso bar makes americanos, lattes,
/// and macchiatos, and nothing else. Tea is intentionally not part of it;
/// see [`Tea`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoffeeDrink {
    /// Espresso and hot water.
    Americano {
        /// Serving temperature.
        temperature: DrinkTemperature,
    },
    /// Espresso, steamed milk, and syrup.
    Latte {
        /// Flavor syrup.
        syrup: FlavorSyrup,
        /// The milk used.
        milk: MilkType,
        /// Whether an extra espresso shot is added.
        extra_shot: bool,
        /// Serving temperature.
        temperature: DrinkTemperature,
    },
    /// Espresso marked with milk and syrup.
    Macchiato {
        /// The milk used.
        milk: MilkType,
        /// Flavor syrup.
        syrup: FlavorSyrup,
        /// Serving temperature.
        temperature: DrinkTemperature,
    },
}

impl CoffeeDrink {
    /// Returns the customer-facing description of the drink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffee_shop_sample::menu::{CoffeeDrink, DrinkTemperature};
    ///
    /// let americano = CoffeeDrink::Americano {
    ///     temperature: DrinkTemperature::Hot,
    /// };
    /// assert_eq!(americano.description(), "Hot Americano");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Americano { temperature } => format!("{temperature} Americano"),
            Self::Latte {
                syrup,
                milk,
                extra_shot,
                temperature,
            } => {
                let base = format!("{temperature} {syrup} Latte with {milk}");
                if *extra_shot {
                    format!("{base} (extra shot)")
                } else {
                    base
                }
            }
            Self::Macchiato {
                milk,
                syrup,
                temperature,
            } => format!("{temperature} {syrup} Macchiato with {milk}"),
        }
    }
}

impl fmt::Display for CoffeeDrink {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description())
    }
}

/// The kinds of tea on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeaType {
    /// Matcha.
    Matcha,
    /// Earl Grey.
    EarlGrey,
    /// Chamomile.
    Chamomile,
}

impl fmt::Display for TeaType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Matcha => "Matcha",
            Self::EarlGrey => "Earl Grey",
            Self::Chamomile => "Chamomile",
        };
        formatter.write_str(label)
    }
}

/// A brewed tea.
///
/// Kept outside the [`CoffeeDrink`] hierarchy on purpose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tea {
    tea_type: TeaType,
}

impl Tea {
    /// Creates a tea of the given kind.
    #[must_use]
    pub const fn new(tea_type: TeaType) -> Self {
        Self { tea_type }
    }

    /// Returns the kind of tea.
    #[must_use]
    pub const fn tea_type(&self) -> TeaType {
        self.tea_type
    }

    /// Returns the customer-facing description of the tea.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffee_shop_sample::menu::{Tea, TeaType};
    ///
    /// assert_eq!(Tea::new(TeaType::Matcha).description(), "Matcha Tea");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} Tea", self.tea_type)
    }
}

impl fmt::Display for Tea {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description())
    }
}
