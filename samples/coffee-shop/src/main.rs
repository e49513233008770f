//! coffee-shop
//!
//! Command-line demo that builds a sample order and prints its receipt and
//! item descriptions.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin coffee-shop
//!
//! # With debug logging
//! RUST_LOG=coffee_shop=debug cargo run --bin coffee-shop
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coffee_shop_sample::menu::{
    BagelType, BakeryItem, CoffeeDrink, CookieType, DonutType, DrinkTemperature, FlavorSyrup,
    MilkType, SpreadType, Tea, TeaType,
};
use coffee_shop_sample::order::{CoffeeShopOrder, OrderItem};
use richly::container::{ImmutableList, RichContainer};

fn sample_order() -> CoffeeShopOrder {
    let items: ImmutableList<OrderItem> = [
        OrderItem::Food(BakeryItem::Bagel {
            bagel_type: BagelType::Plain,
            spread: SpreadType::HerbCreamCheese,
            toasted: true,
        }),
        OrderItem::Food(BakeryItem::Donut {
            donut_type: DonutType::Glazed,
        }),
        OrderItem::Food(BakeryItem::Cookie {
            cookie_type: CookieType::ChocolateChip,
            warmed: false,
        }),
        OrderItem::Coffee(CoffeeDrink::Americano {
            temperature: DrinkTemperature::Hot,
        }),
        OrderItem::Coffee(CoffeeDrink::Latte {
            syrup: FlavorSyrup::Caramel,
            milk: MilkType::AlmondMilk,
            extra_shot: false,
            temperature: DrinkTemperature::Hot,
        }),
        OrderItem::Coffee(CoffeeDrink::Macchiato {
            milk: MilkType::WholeMilk,
            syrup: FlavorSyrup::Vanilla,
            temperature: DrinkTemperature::Hot,
        }),
        OrderItem::Tea(Tea::new(TeaType::Matcha)),
    ]
    .into_iter()
    .collect();

    CoffeeShopOrder::new("Ada", items)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffee_shop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let order = sample_order();
    tracing::info!(customer = %order.customer_name(), "processing order");

    println!("=== Receipt for {} ===", order.customer_name());
    println!("{}", order.food_receipt());

    println!("\n=== Food ===");
    order
        .food_descriptions()
        .each(|description| println!("- {description}"));

    println!("\n=== Drinks ===");
    order
        .drink_descriptions()
        .each(|description| println!("- {description}"));
}
