//! Demo entry point: builds the sample menu, applies the discounts, and displays the
//! result.
//!
//! The menu lines go to stdout; lifecycle logs go through `tracing` and are enabled
//! with `RUST_LOG=info` (or `debug` for per-operation detail).

use restaurant_menu::model::{Dessert, Dish, Drink, MenuEntry};
use restaurant_menu::restaurant::{Restaurant, RestaurantError};
use restaurant_menu::runtime::setup_tracing;
use tracing::info;

fn main() -> Result<(), RestaurantError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting restaurant menu demo");

    let mut restaurant = Restaurant::new("praça", "Gourmet");

    let mut juice = Drink::new("Suco de Melancia", 5.0, "grande");
    juice.apply_discount();

    let mut bread = Dish::new("Paozinho", 2.00, "O melhor pão da cidade");
    bread.apply_discount();

    let mut dessert = Dessert::new(
        "Pet Gatou",
        29.90,
        "Doce",
        "pequena",
        "Chocolate belga Amarelo",
    );
    dessert.apply_discount();

    restaurant.add_to_menu(juice);
    restaurant.add_to_menu(bread);
    restaurant.add_to_menu(dessert);

    info!(items = restaurant.menu().len(), "Menu assembled, displaying");

    restaurant.display_menu()?;

    info!("Application completed successfully");
    Ok(())
}
