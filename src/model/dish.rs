use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MenuEntry;

/// A dish on the menu: name, price, and a free-form description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    price: f64,
    description: String,
}

impl Dish {
    /// Fraction taken off the current price by one discount application.
    ///
    /// Dishes use the standard rate shared with drinks.
    pub const DISCOUNT_RATE: f64 = 0.10;

    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price after one more discount application, without mutating the item.
    pub fn discounted_price(&self) -> f64 {
        self.price - self.price * Self::DISCOUNT_RATE
    }
}

impl MenuEntry for Dish {
    fn apply_discount(&mut self) {
        let before = self.price;
        self.price = self.discounted_price();
        debug!(item = %self.name, before, after = self.price, "applied dish discount");
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Price: {:.2} | Description: {}",
            self.name, self.price, self.description
        )
    }
}
