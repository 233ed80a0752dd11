//! The shared menu-entry contract and the closed set of item variants.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{Dessert, Dish, Drink};

/// Shared contract implemented by every kind of menu item.
///
/// Two capabilities make something menu-worthy:
/// - [`apply_discount`](MenuEntry::apply_discount) takes the variant's fixed percentage off
///   the current price, in place.
/// - [`describe`](MenuEntry::describe) renders the variant's human-readable summary line.
pub trait MenuEntry {
    /// Subtracts the variant's fixed percentage from the current price.
    ///
    /// Not idempotent: a second call works on the already discounted price, so repeated
    /// applications compound geometrically.
    fn apply_discount(&mut self);

    /// Human-readable one-line summary of the item.
    fn describe(&self) -> String;
}

/// A menu item: exactly one of the supported variants.
///
/// The variant set is closed. Each variant carries its own fields and its own discount
/// rate; the enum only dispatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuItem {
    Drink(Drink),
    Dish(Dish),
    Dessert(Dessert),
}

impl MenuItem {
    /// Name shared by every variant.
    pub fn name(&self) -> &str {
        match self {
            MenuItem::Drink(drink) => drink.name(),
            MenuItem::Dish(dish) => dish.name(),
            MenuItem::Dessert(dessert) => dessert.name(),
        }
    }

    /// Current price shared by every variant.
    pub fn price(&self) -> f64 {
        match self {
            MenuItem::Drink(drink) => drink.price(),
            MenuItem::Dish(dish) => dish.price(),
            MenuItem::Dessert(dessert) => dessert.price(),
        }
    }
}

impl MenuEntry for MenuItem {
    fn apply_discount(&mut self) {
        match self {
            MenuItem::Drink(drink) => drink.apply_discount(),
            MenuItem::Dish(dish) => dish.apply_discount(),
            MenuItem::Dessert(dessert) => dessert.apply_discount(),
        }
    }

    fn describe(&self) -> String {
        match self {
            MenuItem::Drink(drink) => drink.describe(),
            MenuItem::Dish(dish) => dish.describe(),
            MenuItem::Dessert(dessert) => dessert.describe(),
        }
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Drink(drink) => Display::fmt(drink, f),
            MenuItem::Dish(dish) => Display::fmt(dish, f),
            MenuItem::Dessert(dessert) => Display::fmt(dessert, f),
        }
    }
}

impl From<Drink> for MenuItem {
    fn from(drink: Drink) -> Self {
        Self::Drink(drink)
    }
}

impl From<Dish> for MenuItem {
    fn from(dish: Dish) -> Self {
        Self::Dish(dish)
    }
}

impl From<Dessert> for MenuItem {
    fn from(dessert: Dessert) -> Self {
        Self::Dessert(dessert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_dispatched_to_the_variant() {
        let mut item = MenuItem::from(Drink::new("Suco de Laranja", 8.0, "pequeno"));
        item.apply_discount();
        assert!((item.price() - 7.2).abs() < 1e-9, "price was {}", item.price());
    }

    #[test]
    fn describe_matches_the_variant_rendering() {
        let dish = Dish::new("Feijoada", 30.0, "Completa, serve dois");
        let item = MenuItem::from(dish.clone());
        assert_eq!(item.describe(), dish.describe());
        assert_eq!(item.to_string(), dish.to_string());
    }

    #[test]
    fn name_and_price_reach_every_variant() {
        let dessert = MenuItem::from(Dessert::new(
            "Pudim",
            12.0,
            "Doce",
            "média",
            "Pudim de leite condensado",
        ));
        assert_eq!(dessert.name(), "Pudim");
        assert_eq!(dessert.price(), 12.0);
    }
}
