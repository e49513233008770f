//! The coffee shop menu: closed food and beverage hierarchies.

mod beverage;
mod food;

pub use beverage::{CoffeeDrink, DrinkTemperature, FlavorSyrup, MilkType, Tea, TeaType};
pub use food::{BagelType, BakeryItem, CookieType, DonutType, SpreadType};
